//! 한글 처리 핵심 로직

pub mod initials;
pub mod unicode;
