mod authenticate;
mod completion;
mod error;
