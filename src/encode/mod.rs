pub mod label;
pub mod name;

pub use label::{encode_labels, label_values, LabelEncoding};
pub use name::{encode_name, encode_names, max_char_len};
