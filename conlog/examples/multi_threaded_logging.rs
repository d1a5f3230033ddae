use conlog::{Level, logger_config, set_thread_name};

fn main() {
    let logger = logger_config().init_global();
    log::info!("Hello, world!");

    let handles: Vec<_> = (0..5)
        .map(|i| {
            std::thread::spawn(move || {
                set_thread_name(&format!("thread {i}"));
                for j in 0..3 {
                    log::info!("step {j}");
                }
                log::warn!("thread {i} done");
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }

    // an independent logger with its own name and settings
    let render = logger_config().with_date(false).build("render");
    render.log(Level::Debug, "independent logger");
    render.log(Level::Fatal, "bye");

    logger.log(Level::Info, "all threads joined");
}
