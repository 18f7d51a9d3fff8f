pub mod advice;
pub mod chat;
pub mod status;
pub mod summary;
pub mod upload;
