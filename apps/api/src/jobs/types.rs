use serde::{Deserialize, Serialize};

/// Date-posted filter accepted by the search endpoint.
///
/// The enumerated set is the full set the listings provider understands; any
/// other value from the client is defaulted to `Month` (the same default used
/// when the parameter is absent) rather than forwarded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DatePosted {
    All,
    Today,
    #[serde(rename = "3days")]
    ThreeDays,
    Week,
    #[default]
    Month,
}

impl DatePosted {
    /// Parses the client-supplied query value. Absent and unrecognized values
    /// both default to `Month`.
    pub fn parse(value: Option<&str>) -> Self {
        match value {
            Some("all") => DatePosted::All,
            Some("today") => DatePosted::Today,
            Some("3days") => DatePosted::ThreeDays,
            Some("week") => DatePosted::Week,
            Some("month") => DatePosted::Month,
            _ => DatePosted::default(),
        }
    }

    /// Wire value expected by the listings provider.
    pub fn as_provider_param(self) -> &'static str {
        match self {
            DatePosted::All => "all",
            DatePosted::Today => "today",
            DatePosted::ThreeDays => "3days",
            DatePosted::Week => "week",
            DatePosted::Month => "month",
        }
    }
}

/// Fully defaulted search parameters handed to the provider.
#[derive(Debug, Clone, PartialEq)]
pub struct JobQuery {
    pub query: String,
    pub location: String,
    pub page: u32,
    pub date_posted: DatePosted,
    pub remote_only: bool,
}

/// One normalized job listing returned to the client.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobListing {
    pub id: String,
    pub title: String,
    pub company: String,
    pub location: String,
    pub description: String,
    pub url: String,
    pub posted_at: Option<String>,
    pub is_remote: bool,
    pub salary: Option<String>,
}

/// Normalized search result: always well-formed, possibly empty.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobSearchResults {
    pub jobs: Vec<JobListing>,
    pub total_jobs: usize,
}

// ────────────────────────────────────────────────────────────────────────────
// Provider wire types (JSearch)
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct JSearchResponse {
    #[serde(default)]
    pub data: Vec<JSearchJob>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct JSearchJob {
    pub job_id: String,
    pub job_title: String,
    pub employer_name: String,
    pub job_city: Option<String>,
    pub job_country: Option<String>,
    pub job_description: String,
    pub job_apply_link: String,
    pub job_posted_at_datetime_utc: Option<String>,
    pub job_is_remote: bool,
    pub job_min_salary: Option<f64>,
    pub job_max_salary: Option<f64>,
    pub job_salary_currency: Option<String>,
}

impl JSearchJob {
    /// Maps the provider's listing shape onto the normalized one.
    pub fn normalize(self) -> JobListing {
        let location = match (self.job_city, self.job_country) {
            (Some(city), Some(country)) if !city.is_empty() && !country.is_empty() => {
                format!("{city}, {country}")
            }
            (Some(city), _) if !city.is_empty() => city,
            (_, Some(country)) if !country.is_empty() => country,
            _ => String::new(),
        };

        let salary = match (self.job_min_salary, self.job_max_salary) {
            (Some(min), Some(max)) => {
                let currency = self.job_salary_currency.as_deref().unwrap_or("");
                Some(format!("{min:.0} - {max:.0} {currency}").trim_end().to_string())
            }
            _ => None,
        };

        JobListing {
            id: self.job_id,
            title: self.job_title,
            company: self.employer_name,
            location,
            description: self.job_description,
            url: self.job_apply_link,
            posted_at: self.job_posted_at_datetime_utc,
            is_remote: self.job_is_remote,
            salary,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_date_posted_parses_every_enumerated_value() {
        assert_eq!(DatePosted::parse(Some("all")), DatePosted::All);
        assert_eq!(DatePosted::parse(Some("today")), DatePosted::Today);
        assert_eq!(DatePosted::parse(Some("3days")), DatePosted::ThreeDays);
        assert_eq!(DatePosted::parse(Some("week")), DatePosted::Week);
        assert_eq!(DatePosted::parse(Some("month")), DatePosted::Month);
    }

    #[test]
    fn test_date_posted_defaults_absent_and_invalid_values() {
        assert_eq!(DatePosted::parse(None), DatePosted::Month);
        assert_eq!(DatePosted::parse(Some("yesterday")), DatePosted::Month);
        assert_eq!(DatePosted::parse(Some("")), DatePosted::Month);
    }

    #[test]
    fn test_provider_param_round_trips_the_enumerated_set() {
        for value in ["all", "today", "3days", "week", "month"] {
            assert_eq!(DatePosted::parse(Some(value)).as_provider_param(), value);
        }
    }

    #[test]
    fn test_normalize_maps_provider_fields() {
        let job = JSearchJob {
            job_id: "abc123".to_string(),
            job_title: "Backend Engineer".to_string(),
            employer_name: "Acme Corp".to_string(),
            job_city: Some("Pune".to_string()),
            job_country: Some("IN".to_string()),
            job_description: "Build services".to_string(),
            job_apply_link: "https://example.com/jobs/abc123".to_string(),
            job_posted_at_datetime_utc: Some("2025-06-01T00:00:00Z".to_string()),
            job_is_remote: true,
            job_min_salary: Some(1_200_000.0),
            job_max_salary: Some(1_800_000.0),
            job_salary_currency: Some("INR".to_string()),
        };
        let listing = job.normalize();
        assert_eq!(listing.location, "Pune, IN");
        assert_eq!(listing.salary.as_deref(), Some("1200000 - 1800000 INR"));
        assert!(listing.is_remote);
    }

    #[test]
    fn test_normalize_tolerates_sparse_listing() {
        let listing = JSearchJob::default().normalize();
        assert_eq!(listing.location, "");
        assert!(listing.salary.is_none());
        assert!(listing.posted_at.is_none());
    }

    #[test]
    fn test_jsearch_response_tolerates_missing_data_field() {
        let response: JSearchResponse = serde_json::from_str(r#"{"status": "OK"}"#).unwrap();
        assert!(response.data.is_empty());
    }

    #[test]
    fn test_job_search_results_serializes_camel_case() {
        let results = JobSearchResults {
            jobs: vec![],
            total_jobs: 0,
        };
        let json = serde_json::to_string(&results).unwrap();
        assert!(json.contains("totalJobs"));
    }
}
