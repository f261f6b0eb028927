pub(crate) mod backend;
pub(crate) mod cpu;
pub(crate) mod fonts;
pub(crate) mod labels;
pub(crate) mod style;
