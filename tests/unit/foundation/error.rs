use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        FacetteError::manifest("x")
            .to_string()
            .contains("manifest error:")
    );
    assert!(FacetteError::asset("x").to_string().contains("asset error:"));
    assert!(
        FacetteError::validation("x")
            .to_string()
            .contains("validation error:")
    );
    assert!(
        FacetteError::export("x")
            .to_string()
            .contains("export error:")
    );
    assert!(
        FacetteError::serde("x")
            .to_string()
            .contains("serialization error:")
    );
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = FacetteError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}
