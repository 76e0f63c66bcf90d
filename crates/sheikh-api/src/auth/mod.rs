//! 인증 구성 요소.
//!
//! - [`SheikhClaims`]: 커스텀 토큰 페이로드
//! - [`JwtTokenIssuer`]: `sheikh_core::TokenIssuer`의 JWT 구현

mod token;

pub use token::{JwtTokenIssuer, SheikhClaims};
