use gloo_net::http::Request;
use serde::Serialize;

use crate::config;

/// Lead as the Odoo connector expects it. `description` is HTML.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct LeadPayload {
    pub name: String,
    pub phone: String,
    pub email_from: String,
    pub description: String,
}

/// Contact-form lead. Company falls back to "Particulier" in the headline,
/// message newlines become `<br/>`.
pub fn contact_lead(
    nom: &str,
    email: &str,
    telephone: &str,
    entreprise: &str,
    message: &str,
) -> LeadPayload {
    let company = if entreprise.trim().is_empty() {
        "Particulier"
    } else {
        entreprise
    };
    let description = [
        "<h3>Nouveau Lead Web - Formulaire Contact</h3>".to_string(),
        format!("<p><strong>Nom:</strong> {nom}</p>"),
        format!("<p><strong>Entreprise:</strong> {entreprise}</p>"),
        format!(
            "<p><strong>Message:</strong><br/>{}</p>",
            message.replace('\n', "<br/>")
        ),
    ]
    .join("\n");
    LeadPayload {
        name: format!("Lead Web: {nom} ({company})"),
        phone: telephone.to_string(),
        email_from: email.to_string(),
        description,
    }
}

/// Guide-download lead (plan d'action 2026 funnel).
pub fn guide_download_lead(
    guide_title: &str,
    first_name: &str,
    last_name: &str,
    email: &str,
    company: &str,
    role: &str,
    wants_diagnostic: bool,
) -> LeadPayload {
    let description = [
        format!("<h3>Téléchargement Guide - {guide_title}</h3>"),
        format!("<p><strong>Nom:</strong> {first_name} {last_name}</p>"),
        format!("<p><strong>Entreprise:</strong> {company}</p>"),
        format!("<p><strong>Fonction:</strong> {role}</p>"),
        format!(
            "<p><strong>Diagnostic personnalisé demandé:</strong> {}</p>",
            if wants_diagnostic { "Oui" } else { "Non" }
        ),
    ]
    .join("\n");
    LeadPayload {
        name: format!("Guide {guide_title}: {first_name} {last_name} ({company})"),
        phone: String::new(),
        email_from: email.to_string(),
        description,
    }
}

/// One POST to the connector. No retry; callers map the result onto their
/// idle/loading/success/error state.
pub async fn submit(payload: &LeadPayload) -> Result<(), String> {
    let url = format!("{}/leads", config::get_crm_api_url());
    let response = Request::post(&url)
        .header("x-signature", config::CRM_SIGNATURE)
        .header("x-client-id", config::CRM_CLIENT_ID)
        .header("x-company-id", config::CRM_COMPANY_ID)
        .json(payload)
        .map_err(|e| e.to_string())?
        .send()
        .await
        .map_err(|e| e.to_string())?;
    outcome(response.ok(), response.status())
}

/// 2xx is success, anything else carries the status for the error banner.
fn outcome(ok: bool, status: u16) -> Result<(), String> {
    if ok {
        Ok(())
    } else {
        Err(format!("lead submit failed with status {status}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn contact_lead_formats_name_and_description() {
        let lead = contact_lead(
            "Jean Dupont",
            "jean@exemple.fr",
            "0601020304",
            "Exemple SARL",
            "Bonjour,\nje souhaite un rendez-vous.",
        );
        assert_eq!(lead.name, "Lead Web: Jean Dupont (Exemple SARL)");
        assert_eq!(lead.email_from, "jean@exemple.fr");
        assert_eq!(lead.phone, "0601020304");
        assert!(lead.description.starts_with("<h3>Nouveau Lead Web"));
        assert!(lead
            .description
            .contains("Bonjour,<br/>je souhaite un rendez-vous."));
    }

    #[test]
    fn missing_company_reads_particulier() {
        let lead = contact_lead("Jean", "j@e.fr", "", "  ", "m");
        assert_eq!(lead.name, "Lead Web: Jean (Particulier)");
    }

    #[test]
    fn guide_lead_carries_the_diagnostic_flag() {
        let lead = guide_download_lead(
            "Plan d'Action 2026",
            "Marie",
            "Martin",
            "marie@pme.fr",
            "PME SAS",
            "DAF",
            true,
        );
        assert!(lead.name.starts_with("Guide Plan d'Action 2026: Marie Martin"));
        assert!(lead.description.contains("Diagnostic personnalisé demandé:</strong> Oui"));

        let no = guide_download_lead("G", "a", "b", "e@f.fr", "c", "r", false);
        assert!(no.description.contains("</strong> Non"));
    }

    #[test]
    fn successful_responses_map_to_ok() {
        assert_eq!(outcome(true, 200), Ok(()));
        assert_eq!(outcome(true, 201), Ok(()));
    }

    #[test]
    fn failed_responses_map_to_an_error_carrying_the_status() {
        let err = outcome(false, 422).unwrap_err();
        assert!(err.contains("422"), "{err}");
        assert!(outcome(false, 500).unwrap_err().contains("500"));
    }

    #[test]
    fn payload_serializes_with_connector_field_names() {
        let lead = contact_lead("Jean", "j@e.fr", "06", "E", "m");
        let json = serde_json::to_string(&lead).unwrap();
        assert!(json.contains("\"email_from\""));
        assert!(json.contains("\"phone\""));
        assert!(json.contains("\"description\""));
    }
}
