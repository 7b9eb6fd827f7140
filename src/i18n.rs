#[macro_export]
macro_rules! tr {
  ($k:ident, $v:expr) => {
    pub(crate) const $k: &str = $v;
  };
}

mod en;
use en as translations;

pub(crate) use translations::*;
