use std::{
    io::{self, Write},
    sync::{Mutex, PoisonError},
};

/// A destination for rendered log lines.
///
/// `write_flush` receives one complete line and must write it in one go and
/// flush before returning, so lines from concurrent callers never mix.
pub trait Sink: Send + Sync {
    fn write_flush(&self, buf: &[u8]) -> io::Result<()>;
}

impl Sink for io::Stdout {
    fn write_flush(&self, buf: &[u8]) -> io::Result<()> {
        let mut out = self.lock();
        out.write_all(buf)?;
        out.flush()
    }
}

impl Sink for io::Stderr {
    fn write_flush(&self, buf: &[u8]) -> io::Result<()> {
        let mut err = self.lock();
        err.write_all(buf)?;
        err.flush()
    }
}

/// Any writer behind a mutex is a sink: files, sockets, in-memory buffers.
impl<W: Write + Send> Sink for Mutex<W> {
    fn write_flush(&self, buf: &[u8]) -> io::Result<()> {
        let mut writer = self.lock().unwrap_or_else(PoisonError::into_inner);
        writer.write_all(buf)?;
        writer.flush()
    }
}

#[test]
fn test_mutex_sink() {
    let sink = Mutex::new(Vec::<u8>::new());
    sink.write_flush(b"Hello, world!\n").unwrap();
    sink.write_flush(b"rust is awesome !\n").unwrap();
    assert_eq!(
        String::from_utf8(sink.into_inner().unwrap()).unwrap(),
        "Hello, world!\nrust is awesome !\n"
    );
}

#[test]
fn test_file_sink() {
    let path = "/tmp/conlog_test_file_sink.log";
    std::fs::remove_file(path).ok();
    let sink = Mutex::new(std::fs::File::create(path).unwrap());
    sink.write_flush(b"line1\n").unwrap();
    sink.write_flush(b"line2\n").unwrap();
    assert_eq!(std::fs::read_to_string(path).unwrap(), "line1\nline2\n");
}
