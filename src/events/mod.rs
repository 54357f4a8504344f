pub mod interaction;
pub mod keyboard;
pub mod pointer;
