pub mod codec;
pub mod issue;
pub mod verify;
