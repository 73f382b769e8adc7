pub(crate) mod cors;
pub(crate) mod rate_limit;
pub(crate) mod security_headers;
pub(crate) mod trace;
