/// Ordered (label, keyword phrases) table. Declaration order is match
/// priority: the first label with any keyword found in the title wins, so
/// specific services sit above the broad buckets that would also match.
/// Both the order and the phrase sets are load-bearing for which topic a
/// question gets.
const TOPICS: &[(&str, &[&str])] = &[
    ("Azure Functions", &["function", "azure function", "function app", "trigger"]),
    ("Azure App Service", &["app service", "web app", "deployment slot"]),
    ("Azure Storage", &["blob storage", "storage account", "azure storage"]),
    ("Azure Cosmos DB", &["cosmos db", "nosql", "cosmos"]),
    ("Azure Service Bus", &["service bus", "queue", "message"]),
    ("Azure Container", &["container", "docker", "kubernetes"]),
    ("Azure Key Vault", &["key vault", "secret", "certificate"]),
    ("Azure Monitor", &["monitor", "logging", "analytics"]),
    ("Azure API Management", &["api management", "api gateway"]),
    ("Azure Event", &["event hub", "event grid", "event"]),
];

const DEFAULT_TOPIC: &str = "Azure fundamentals";

/// Derive the explanation for a question title. This is a coarse labeling
/// aid, not answer validation: the template only names the matched topic.
pub fn for_title(title: &str) -> String {
    format!(
        "This question covers {} concepts. The correct answer is based on Azure best practices and service capabilities.",
        classify(title)
    )
}

/// First-match-wins keyword classification over the lower-cased title.
pub fn classify(title: &str) -> &'static str {
    let lower = title.to_lowercase();
    TOPICS
        .iter()
        .find(|(_, keywords)| keywords.iter().any(|kw| lower.contains(kw)))
        .map(|(label, _)| *label)
        .unwrap_or(DEFAULT_TOPIC)
}
