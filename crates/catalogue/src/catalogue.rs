use serde::{Deserialize, Serialize};

use pdc_core::{CatalogueId, DomainError, DomainResult, Entity, EntityKind};

use crate::fields::{self, DESCRIPTION_MAX, NAME_MAX, TEXT_MAX};

/// Tenant-scoped top-level container, owned by one organization.
///
/// Owns groups and products one-to-many. The link is stored on the child side
/// (`Group::catalogue`, `Product::catalogue`); navigate downwards through a
/// store listing or `CatalogueGraph::groups_of`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "CatalogueFields")]
pub struct Catalogue {
    id: CatalogueId,
    name: String,
    description: Option<String>,
    logo: Option<String>,
    source_organization: String,
}

impl Catalogue {
    pub fn new(name: impl Into<String>, source_organization: impl Into<String>) -> DomainResult<Self> {
        Ok(Self {
            id: CatalogueId::new(),
            name: fields::required_text("name", name.into(), NAME_MAX)?,
            description: None,
            logo: None,
            source_organization: fields::required_text(
                "source_organization",
                source_organization.into(),
                TEXT_MAX,
            )?,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn logo(&self) -> Option<&str> {
        self.logo.as_deref()
    }

    pub fn source_organization(&self) -> &str {
        &self.source_organization
    }

    pub fn set_name(&mut self, name: impl Into<String>) -> DomainResult<()> {
        self.name = fields::required_text("name", name.into(), NAME_MAX)?;
        Ok(())
    }

    pub fn set_description(&mut self, description: Option<String>) -> DomainResult<()> {
        self.description = fields::optional_text("description", description, DESCRIPTION_MAX)?;
        Ok(())
    }

    pub fn set_logo(&mut self, logo: Option<String>) -> DomainResult<()> {
        self.logo = fields::optional_url("logo", logo)?;
        Ok(())
    }

    pub fn set_source_organization(&mut self, source_organization: impl Into<String>) -> DomainResult<()> {
        self.source_organization =
            fields::required_text("source_organization", source_organization.into(), TEXT_MAX)?;
        Ok(())
    }
}

impl Entity for Catalogue {
    type Id = CatalogueId;
    const KIND: EntityKind = EntityKind::Catalogue;

    fn id(&self) -> &Self::Id {
        &self.id
    }

    fn assign_id(&mut self, id: Self::Id) {
        self.id = id;
    }
}

/// Wire shape of a [`Catalogue`]; deserialization goes through the validated setters.
#[derive(Deserialize)]
struct CatalogueFields {
    id: CatalogueId,
    name: String,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    logo: Option<String>,
    source_organization: String,
}

impl TryFrom<CatalogueFields> for Catalogue {
    type Error = DomainError;

    fn try_from(f: CatalogueFields) -> DomainResult<Self> {
        let mut catalogue = Catalogue::new(f.name, f.source_organization)?;
        catalogue.assign_id(f.id);
        catalogue.set_description(f.description)?;
        catalogue.set_logo(f.logo)?;
        Ok(catalogue)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pdc_core::DomainError;

    #[test]
    fn new_catalogue_requires_name_and_organization() {
        assert!(Catalogue::new("Gemeente Zuid Drecht", "0000").is_ok());
        assert_eq!(Catalogue::new("", "0000").unwrap_err().field(), Some("name"));
        assert_eq!(
            Catalogue::new("Gemeente Utrecht", " ").unwrap_err().field(),
            Some("source_organization")
        );
    }

    #[test]
    fn invalid_logo_leaves_previous_value_in_place() {
        let mut c = Catalogue::new("Gemeente Hoorn", "0000").unwrap();
        c.set_logo(Some("https://www.my-organization.com/GemeenteHoornlogo.png".into()))
            .unwrap();

        let err = c.set_logo(Some("hoorn logo".into())).unwrap_err();
        assert!(matches!(err, DomainError::Validation { field: "logo", .. }));
        assert_eq!(c.logo(), Some("https://www.my-organization.com/GemeenteHoornlogo.png"));
    }

    #[test]
    fn description_limit_is_2550_characters() {
        let mut c = Catalogue::new("Gemeente SED", "0000").unwrap();
        assert!(c.set_description(Some("x".repeat(2550))).is_ok());
        assert!(c.set_description(Some("x".repeat(2551))).is_err());
        c.set_description(None).unwrap();
        assert_eq!(c.description(), None);
    }

    #[test]
    fn deserializing_runs_field_validation() {
        let mut c = Catalogue::new("Gemeente Medemblik", "0000").unwrap();
        c.set_logo(Some("https://www.my-organization.com/logo.png".into())).unwrap();
        let json = serde_json::to_value(&c).unwrap();
        assert_eq!(serde_json::from_value::<Catalogue>(json.clone()).unwrap(), c);

        let mut blank = json.clone();
        blank["name"] = "".into();
        let err = serde_json::from_value::<Catalogue>(blank).unwrap_err();
        assert!(err.to_string().contains("`name`"), "{err}");

        let mut bad_logo = json;
        bad_logo["logo"] = "not a url".into();
        let err = serde_json::from_value::<Catalogue>(bad_logo).unwrap_err();
        assert!(err.to_string().contains("`logo`"), "{err}");
    }

    #[test]
    fn fixed_identifier_can_be_assigned() {
        let mut c = Catalogue::new("Gemeente Opmeer", "0000").unwrap();
        let id: CatalogueId = "16fd1092-c4d3-4011-8998-0e15e13239cf".parse().unwrap();
        c.assign_id(id);
        assert_eq!(*c.id(), id);
    }
}
