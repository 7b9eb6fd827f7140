pub(crate) mod traits;

pub(crate) mod environment;
pub(crate) mod esbuild;
