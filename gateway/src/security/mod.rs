pub mod filter;
pub mod provider;

pub use filter::AuthorizerFilter;
pub use provider::{
    CognitoSecurityContextProvider, CustomAuthorizerSecurityContextProvider,
    SecurityContextProvider,
};
