use colored::Colorize;

/// Colour helpers for console output. The formatted text is wrapped through
/// `colored` so `NO_COLOR` and non-tty detection are honoured.
pub fn red(text: String) -> String {
    text.red().to_string()
}

pub fn green(text: String) -> String {
    text.green().to_string()
}

pub fn yellow(text: String) -> String {
    text.yellow().to_string()
}

pub fn blue(text: String) -> String {
    text.blue().bold().to_string()
}

#[macro_export]
macro_rules! print_red {
    ($($arg:tt)*) => {
        println!("{}", $crate::bnet::common::logging::red(format!($($arg)*)));
    };
}

#[macro_export]
macro_rules! print_green {
    ($($arg:tt)*) => {
        println!("{}", $crate::bnet::common::logging::green(format!($($arg)*)));
    };
}

#[macro_export]
macro_rules! print_yellow {
    ($($arg:tt)*) => {
        println!("{}", $crate::bnet::common::logging::yellow(format!($($arg)*)));
    };
}

#[macro_export]
macro_rules! print_blue {
    ($($arg:tt)*) => {
        println!("{}", $crate::bnet::common::logging::blue(format!($($arg)*)));
    };
}
