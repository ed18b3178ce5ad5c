use serde_json::Value;
use std::collections::HashMap;

use crate::container::SecurityContext;

pub const COGNITO_USER_POOL_SCHEME: &str = "cognito_user_pool";
pub const CUSTOM_AUTHORIZER_SCHEME: &str = "custom_authorizer";

/// The claims-to-principal strategy. The filter is generic over this;
/// the concrete mapping depends on which authorizer kind fronted the
/// API, selected at configuration time.
pub trait SecurityContextProvider: Send + Sync {
    fn derive_security_context(&self, claims: &HashMap<String, Value>) -> Box<dyn SecurityContext>;
}

impl SecurityContextProvider for Box<dyn SecurityContextProvider> {
    fn derive_security_context(&self, claims: &HashMap<String, Value>) -> Box<dyn SecurityContext> {
        (**self).derive_security_context(claims)
    }
}

#[derive(Debug, Clone)]
struct AuthorizerSecurityContext {
    principal: Option<String>,
    scheme: &'static str,
}

impl SecurityContext for AuthorizerSecurityContext {
    fn principal_name(&self) -> Option<&str> {
        self.principal.as_deref()
    }

    fn authentication_scheme(&self) -> &str {
        self.scheme
    }

    fn is_user_in_role(&self, _role: &str) -> bool {
        false
    }

    fn is_secure(&self) -> bool {
        // TLS terminates at the platform edge.
        true
    }
}

/// Reads the nested `claims` object a Cognito user-pool authorizer
/// attaches; the principal name comes from `cognito:username`, falling
/// back to `sub`.
#[derive(Debug, Clone, Default)]
pub struct CognitoSecurityContextProvider;

impl SecurityContextProvider for CognitoSecurityContextProvider {
    fn derive_security_context(&self, claims: &HashMap<String, Value>) -> Box<dyn SecurityContext> {
        let nested = claims.get("claims").and_then(Value::as_object);
        let principal = nested
            .and_then(|claims| claims.get("cognito:username").or_else(|| claims.get("sub")))
            .or_else(|| claims.get("sub"))
            .and_then(Value::as_str)
            .map(str::to_string);

        Box::new(AuthorizerSecurityContext {
            principal,
            scheme: COGNITO_USER_POOL_SCHEME,
        })
    }
}

/// Principal name from the `principalId` a custom authorizer attaches;
/// a context without a principal is still installed when the claims
/// mapping is non-empty.
#[derive(Debug, Clone, Default)]
pub struct CustomAuthorizerSecurityContextProvider;

impl SecurityContextProvider for CustomAuthorizerSecurityContextProvider {
    fn derive_security_context(&self, claims: &HashMap<String, Value>) -> Box<dyn SecurityContext> {
        let principal = claims
            .get("principalId")
            .and_then(Value::as_str)
            .map(str::to_string);

        Box::new(AuthorizerSecurityContext {
            principal,
            scheme: CUSTOM_AUTHORIZER_SCHEME,
        })
    }
}
