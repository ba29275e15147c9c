/// SAML 2.0 HTTP-POST binding.
pub const HTTP_POST: &str = "urn:oasis:names:tc:SAML:2.0:bindings:HTTP-POST";
/// SAML 2.0 HTTP-Redirect binding.
pub const HTTP_REDIRECT: &str = "urn:oasis:names:tc:SAML:2.0:bindings:HTTP-Redirect";
/// SAML 2.0 HTTP-Artifact binding.
pub const HTTP_ARTIFACT: &str = "urn:oasis:names:tc:SAML:2.0:bindings:HTTP-Artifact";
/// SAML 2.0 SOAP binding.
pub const SOAP: &str = "urn:oasis:names:tc:SAML:2.0:bindings:SOAP";
/// SAML 2.0 reverse SOAP (ECP) binding.
pub const PAOS: &str = "urn:oasis:names:tc:SAML:2.0:bindings:PAOS";
/// Holder-of-key web browser SSO profile.
pub const HOK_SSO: &str = "urn:oasis:names:tc:SAML:2.0:profiles:holder-of-key:SSO:browser";

/// Shibboleth 1.3 authentication request profile.
pub const SHIB13_AUTHN_REQUEST: &str = "urn:mace:shibboleth:1.0:profiles:AuthnRequest";
/// SAML 1.x browser/POST profile.
pub const SAML1_BROWSER_POST: &str = "urn:oasis:names:tc:SAML:1.0:profiles:browser-post";
/// SAML 1.x browser/artifact profile.
pub const SAML1_ARTIFACT: &str = "urn:oasis:names:tc:SAML:1.0:profiles:artifact-01";
/// SAML 1.x SOAP binding.
pub const SAML1_SOAP: &str = "urn:oasis:names:tc:SAML:1.0:bindings:SOAP-binding";

/// Front-channel SAML 2.0 bindings a browser can carry.
pub const SAML2_FRONT_CHANNEL: [&str; 3] = [HTTP_POST, HTTP_REDIRECT, HTTP_ARTIFACT];
