mod clone_url;
mod ecosystem_classifier;
mod notice_synthesizer;
mod sbom_document_formatter;

pub use clone_url::{CloneUrl, CloneUrlBuilder};
pub use ecosystem_classifier::{Detection, EcosystemClassifier};
pub use notice_synthesizer::NoticeSynthesizer;
pub use sbom_document_formatter::SbomDocumentFormatter;
