use cortex_m_log::log::{init as init_log, Logger};
use cortex_m_log::modes::InterruptOk;
use cortex_m_log::printer::semihosting;
use cortex_m_log::printer::semihosting::Semihosting;
use cortex_m_semihosting::hio::HStdout;
use lazy_static::lazy_static;
use log::LevelFilter;

lazy_static! {
    static ref LOGGER: Logger<Semihosting<InterruptOk, HStdout>> = Logger {
        level: LevelFilter::Debug,
        inner: semihosting::InterruptOk::<_>::stdout().expect("semihosting stdout"),
    };
}

pub fn init() {
    init_log(&*LOGGER).unwrap();
}
