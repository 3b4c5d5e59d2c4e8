/***************************************/
/*               Macros                */
/***************************************/
/// Unwraps a `Result`, or logs the error and terminates the process.
/// Only meant for startup paths in the binary.
#[macro_export]
macro_rules! unwrap_or_exit {
    ($expr:expr) => {
        match $expr {
            Ok(val) => val,
            Err(e) => {
                log::error!("{}", e);
                std::process::exit(1);
            }
        }
    };
}
