mod password;
mod properties;
