//! Reusable test content.

/// Module with the capability marker declared.
pub const CONFIG: &str = r#"
[module]
group = "org.acme"
name = "pricing"
version = "1.0.0"

[[dependencies]]
group = "org.rulegen"
name = "rules-model-compiler"
version = "0.9.3"
"#;

/// Same module without the capability marker.
pub const CONFIG_WITHOUT_MARKER: &str = r#"
[module]
group = "org.acme"
name = "pricing"
version = "1.0.0"
"#;

pub const PRICING_DRL: &str = r#"package org.acme.pricing;

rule "Adult discount"
    salience 10
when
    $p : Person(age >= 18)
then
    $p.grantDiscount(5);
end
"#;

pub const SHIPPING_DRL: &str = r#"package org.acme.pricing;

rule "Free shipping"
when
    $o : Order(total > 100)
then
    $o.freeShipping();
end
"#;

/// A rule that never closes its `then` block.
pub const BROKEN_DRL: &str = r#"package org.acme.pricing;

rule "Broken"
when
    $p : Person()
"#;

pub const PRICING_SOURCE: &str = "org/acme/pricing.drl";
pub const SHIPPING_SOURCE: &str = "org/acme/shipping.drl";

pub const GENERATED_ROOT: &str = "target/generated-sources/model-compiler/main";
pub const RULES_CLASS: &str =
    "target/generated-sources/model-compiler/main/org/acme/pricing/Rules.java";
pub const MANIFEST: &str = "target/classes/META-INF/org.acme/pricing/1.0.0/rules-model";
