pub mod check;
pub mod cv;
pub mod init;
pub mod run;
pub mod sections;
