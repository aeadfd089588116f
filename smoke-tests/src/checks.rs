//! The fixed smoke-test sequence: health, search, document fetch.

use crate::client::{doc_id_of, GatewayClient};

/// Result of a single check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckOutcome {
    pub name: &'static str,
    pub passed: bool,
    pub detail: String,
}

impl CheckOutcome {
    fn pass(name: &'static str, detail: impl Into<String>) -> Self {
        Self {
            name,
            passed: true,
            detail: detail.into(),
        }
    }

    fn fail(name: &'static str, detail: impl Into<String>) -> Self {
        Self {
            name,
            passed: false,
            detail: detail.into(),
        }
    }

    pub fn line(&self) -> String {
        let mark = if self.passed { "✓" } else { "✗" };
        format!("{} {}", mark, self.detail)
    }
}

#[derive(Debug, Clone, Default)]
pub struct SmokeReport {
    pub outcomes: Vec<CheckOutcome>,
}

impl SmokeReport {
    pub fn passed(&self) -> usize {
        self.outcomes.iter().filter(|o| o.passed).count()
    }

    pub fn total(&self) -> usize {
        self.outcomes.len()
    }

    pub fn all_passed(&self) -> bool {
        self.passed() == self.total()
    }
}

pub async fn check_health(client: &GatewayClient) -> CheckOutcome {
    const NAME: &str = "health";
    match client.health().await {
        Ok(reply) if reply.status == 200 => CheckOutcome::pass(NAME, "Health check passed"),
        Ok(reply) => CheckOutcome::fail(
            NAME,
            format!("Health check failed with status: {}", reply.status),
        ),
        Err(e) => CheckOutcome::fail(NAME, format!("Health check failed: {}", e)),
    }
}

pub async fn check_search(client: &GatewayClient) -> CheckOutcome {
    const NAME: &str = "search";
    match client.search_cases("constitutional rights", 0, 5).await {
        Ok(reply) if reply.status == 200 => match reply.body.get("docs") {
            Some(docs) => CheckOutcome::pass(
                NAME,
                format!(
                    "Search successful - found {} results",
                    docs.as_array().map(Vec::len).unwrap_or(0)
                ),
            ),
            None => CheckOutcome::fail(NAME, "Search returned no results"),
        },
        Ok(reply) => {
            CheckOutcome::fail(NAME, format!("Search failed with status: {}", reply.status))
        }
        Err(e) => CheckOutcome::fail(NAME, format!("Search failed: {}", e)),
    }
}

/// Searches for a document id, then fetches that document.
pub async fn check_document_fetch(client: &GatewayClient) -> CheckOutcome {
    const NAME: &str = "document fetch";

    let search = match client.search_cases("supreme court", 0, 1).await {
        Ok(reply) if reply.status == 200 => reply,
        Ok(reply) => {
            return CheckOutcome::fail(
                NAME,
                format!("Search failed during document test: {}", reply.status),
            )
        }
        Err(e) => return CheckOutcome::fail(NAME, format!("Document fetch failed: {}", e)),
    };

    let Some(doc_id) = search
        .docs()
        .and_then(|docs| docs.first())
        .and_then(doc_id_of)
    else {
        return CheckOutcome::fail(NAME, "No documents found to test with");
    };

    match client.case_details(doc_id).await {
        Ok(reply) if reply.status == 200 => {
            CheckOutcome::pass(NAME, format!("Document fetch successful for ID: {}", doc_id))
        }
        Ok(reply) => CheckOutcome::fail(
            NAME,
            format!("Document fetch failed with status: {}", reply.status),
        ),
        Err(e) => CheckOutcome::fail(NAME, format!("Document fetch failed: {}", e)),
    }
}

/// Runs every check in order, printing each outcome as it completes.
pub async fn run_smoke_tests(client: &GatewayClient) -> SmokeReport {
    let mut report = SmokeReport::default();

    println!("Testing health check...");
    report.outcomes.push(check_health(client).await);
    println!("{}", report.outcomes[0].line());

    println!("\nTesting search endpoint...");
    report.outcomes.push(check_search(client).await);
    println!("{}", report.outcomes[1].line());

    println!("\nTesting document fetch...");
    report.outcomes.push(check_document_fetch(client).await);
    println!("{}", report.outcomes[2].line());

    for outcome in &report.outcomes {
        tracing::info!(check = outcome.name, passed = outcome.passed, detail = %outcome.detail);
    }

    report
}
