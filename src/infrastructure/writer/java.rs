//! Java source rendering helpers

use std::collections::HashSet;

use crate::domain::entities::PackageModel;
use crate::domain::value_objects::ModuleIdentity;

pub(crate) fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c => out.push(c),
        }
    }
    out
}

pub(crate) fn quoted(s: &str) -> String {
    format!("\"{}\"", escape(s))
}

pub(crate) fn string_array(items: &[String]) -> String {
    if items.is_empty() {
        return "new String[0]".to_string();
    }
    let items: Vec<String> = items.iter().map(|s| quoted(s)).collect();
    format!("new String[] {{ {} }}", items.join(", "))
}

pub(crate) fn attribute_array(attributes: &[(String, String)]) -> String {
    if attributes.is_empty() {
        return "new String[0][]".to_string();
    }
    let pairs: Vec<String> = attributes
        .iter()
        .map(|(k, v)| format!("{{ {}, {} }}", quoted(k), quoted(v)))
        .collect();
    format!("new String[][] {{ {} }}", pairs.join(", "))
}

fn words(name: &str) -> Vec<String> {
    name.split(|c: char| !c.is_ascii_alphanumeric())
        .filter(|w| !w.is_empty())
        .map(str::to_string)
        .collect()
}

/// `Adult discount` -> `ADULT_DISCOUNT`
pub(crate) fn constant_name(name: &str) -> String {
    let joined = words(name)
        .iter()
        .map(|w| w.to_ascii_uppercase())
        .collect::<Vec<_>>()
        .join("_");
    prefix_if_needed(joined, "RULE")
}

/// `adult discount` -> `AdultDiscount`
pub(crate) fn class_name(name: &str) -> String {
    let joined: String = words(name)
        .iter()
        .map(|w| {
            let mut chars = w.chars();
            match chars.next() {
                Some(first) => first.to_ascii_uppercase().to_string() + chars.as_str(),
                None => String::new(),
            }
        })
        .collect();
    prefix_if_needed(joined, "Rule")
}

fn prefix_if_needed(ident: String, prefix: &str) -> String {
    match ident.chars().next() {
        None => prefix.to_string(),
        Some(c) if c.is_ascii_digit() => format!("{}{}", prefix, ident),
        Some(_) => ident,
    }
}

/// Make every identifier unique by suffixing `_2`, `_3`, ... on collision.
pub(crate) fn unique(idents: impl IntoIterator<Item = String>, reserved: &[&str]) -> Vec<String> {
    let mut seen: HashSet<String> = reserved.iter().map(|s| s.to_string()).collect();
    idents
        .into_iter()
        .map(|ident| {
            let mut candidate = ident.clone();
            let mut n = 2;
            while !seen.insert(candidate.clone()) {
                candidate = format!("{}_{}", ident, n);
                n += 1;
            }
            candidate
        })
        .collect()
}

/// File header and package/import block.
pub(crate) fn preamble(package: &PackageModel, module: &ModuleIdentity) -> String {
    let sources: Vec<&str> = package.sources().into_iter().map(|p| p.as_str()).collect();
    let mut out = format!(
        "// Generated by rulegen for {} from {}. Do not edit.\npackage {};\n",
        module,
        if sources.is_empty() { "<none>".to_string() } else { sources.join(", ") },
        package.name()
    );
    if !package.imports().is_empty() {
        out.push('\n');
        for import in package.imports() {
            out.push_str(&format!("import {};\n", import));
        }
    }
    out
}
