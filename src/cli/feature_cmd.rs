//! Feature listing commands

use std::collections::BTreeMap;

use anyhow::Result;

use super::output::Output;
use crate::domain::{ApplicationType, Category};
use crate::feature::{FeatureRef, FeatureRegistry};

fn summary(feature: &FeatureRef) -> serde_json::Value {
    serde_json::json!({
        "name": feature.name(),
        "title": feature.title(),
        "description": feature.description(),
        "category": feature.category().as_str(),
        "preview": feature.is_preview(),
        "visible": feature.is_visible(),
        "default": feature.as_default_feature().is_some(),
    })
}

pub fn list(
    output: &Output,
    registry: &FeatureRegistry,
    application_type: Option<ApplicationType>,
    all: bool,
) -> Result<()> {
    let features: Vec<&FeatureRef> = registry
        .iter()
        .filter(|f| all || f.is_visible())
        .filter(|f| application_type.map_or(true, |ty| f.supports(ty)))
        .collect();

    output.verbose_ctx(
        "list",
        &format!(
            "{} of {} features match (type={:?}, all={})",
            features.len(),
            registry.len(),
            application_type,
            all
        ),
    );

    if !output.is_text() {
        let items: Vec<_> = features.iter().map(|f| summary(f)).collect();
        output.data(&items);
        return Ok(());
    }

    if features.is_empty() {
        println!("No features found.");
        return Ok(());
    }

    let mut by_category: BTreeMap<Category, Vec<&FeatureRef>> = BTreeMap::new();
    for feature in features {
        by_category.entry(feature.category()).or_default().push(feature);
    }

    for (category, features) in by_category {
        println!("{}", category);
        for feature in features {
            let mut flags = Vec::new();
            if feature.is_preview() {
                flags.push("preview");
            }
            if feature.as_default_feature().is_some() {
                flags.push("default");
            }
            if !feature.is_visible() {
                flags.push("hidden");
            }
            let flags = if flags.is_empty() {
                String::new()
            } else {
                format!(" [{}]", flags.join(", "))
            };
            println!("  {:<24} {}{}", feature.name(), feature.description(), flags);
        }
        output.blank();
    }

    Ok(())
}

pub fn show(output: &Output, registry: &FeatureRegistry, name: &str) -> Result<()> {
    let feature = registry
        .get(name)
        .ok_or_else(|| anyhow::anyhow!("Unknown feature: {}", name))?;

    let supported: Vec<&str> = ApplicationType::ALL
        .into_iter()
        .filter(|ty| feature.supports(*ty))
        .map(|ty| ty.as_str())
        .collect();
    let links = feature.documentation_links();

    if !output.is_text() {
        let mut data = summary(feature);
        data["supports"] = serde_json::json!(supported);
        data["requires"] = serde_json::json!(feature.required_features());
        data["documentation"] = serde_json::json!(links);
        output.data(&data);
        return Ok(());
    }

    println!("{} ({})", feature.title(), feature.name());
    if !feature.description().is_empty() {
        println!("{}", feature.description());
    }
    output.blank();
    output.row(&["Category:", feature.category().as_str()]);
    output.row(&["Supports:", &supported.join(", ")]);
    if !feature.required_features().is_empty() {
        output.row(&["Requires:", &feature.required_features().join(", ")]);
    }
    if feature.is_preview() {
        output.row(&["Preview:", "yes"]);
    }
    if feature.as_default_feature().is_some() {
        output.row(&["Default:", "yes"]);
    }
    if !links.is_empty() {
        output.blank();
        println!("Documentation:");
        for link in &links {
            println!("  {}: {}", link.title(), link.url());
        }
    }

    Ok(())
}
