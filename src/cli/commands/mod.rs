pub mod completion;
pub mod go;
pub mod help;
pub mod here;
pub mod init;
pub mod list;
pub mod placeholder;
pub mod start;
