pub mod pricing_page_template;

pub use pricing_page_template::PricingPageTemplate;
