#[cfg(debug_assertions)]
pub fn get_crm_api_url() -> &'static str {
    "http://localhost:3001/api"  // Local connector when developing
}

#[cfg(not(debug_assertions))]
pub fn get_crm_api_url() -> &'static str {
    "https://api-connect-odoo.vercel.app/api"
}

// Static credentials of the Odoo lead connector. The connector only accepts
// lead creation, so shipping these in the bundle is equivalent to the
// contact form itself.
pub const CRM_SIGNATURE: &str =
    "f48fc94a838ab87d65de288bfcb037d109d1141fd981f70f378be51c91c764bd";
pub const CRM_CLIENT_ID: &str = "client_mslconseils";
pub const CRM_COMPANY_ID: &str = "7";
