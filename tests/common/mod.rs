#![allow(dead_code)]

use inistore::domain::value::Value;
use std::io::Write;

pub fn write_temp_ini(content: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

pub fn list(items: &[&str]) -> Value {
    Value::from(items)
}

pub const SAMPLE_INI: &str = r#"
; General options
[General]
debug
level=1,2,3
name = Main Window

// paths
[Paths]
home=/home/user
search = ./a , ./b ,./c

[Empty]
"#;
