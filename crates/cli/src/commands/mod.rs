mod check;
mod tokens;

pub(crate) use check::cmd_check;
pub(crate) use tokens::cmd_tokens;
