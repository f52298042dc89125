//! Fixed identifiers for seeded objects.
//!
//! Each dataset maps logical keys (`group.diensten`) to the UUID that object
//! always receives, so repeated runs address the same logical object.

use core::str::FromStr;

use uuid::Uuid;

use pdc_core::{DomainError, DomainResult};

/// Logical key → fixed identifier.
#[derive(Debug, Copy, Clone)]
pub struct IdTable {
    entries: &'static [(&'static str, &'static str)],
}

impl IdTable {
    pub const fn new(entries: &'static [(&'static str, &'static str)]) -> Self {
        Self { entries }
    }

    /// The fixed identifier for `key`, if one is registered.
    pub fn get(&self, key: &str) -> DomainResult<Option<Uuid>> {
        self.entries
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, raw)| Uuid::from_str(raw).map_err(|e| DomainError::invalid_id(format!("{key}: {e}"))))
            .transpose()
    }

    pub fn require(&self, key: &str) -> DomainResult<Uuid> {
        self.get(key)?
            .ok_or_else(|| DomainError::validation("id", format!("no fixed identifier registered for `{key}`")))
    }

    /// Every key unique, every value a UUID, no UUID used twice.
    pub fn validate(&self) -> DomainResult<()> {
        let mut seen_keys = std::collections::HashSet::new();
        let mut seen_ids = std::collections::HashSet::new();
        for (key, raw) in self.entries {
            if !seen_keys.insert(*key) {
                return Err(DomainError::conflict(format!("key `{key}` registered twice")));
            }
            let id = Uuid::from_str(raw).map_err(|e| DomainError::invalid_id(format!("{key}: {e}")))?;
            if !seen_ids.insert(id) {
                return Err(DomainError::conflict(format!("identifier {id} registered twice (at `{key}`)")));
            }
        }
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

pub const ZUID_DRECHT: IdTable = IdTable::new(&[
    ("catalogue.zuid-drecht", "2655028a-bd64-431f-93a3-6fdb7e552426"),
    ("group.ballie", "1baea858-1512-454b-ad58-0d30ac5ef10e"),
    ("group.identiteit", "b2e220b6-9f5c-45b4-84ec-8727123df185"),
    ("group.diensten", "bbc03703-27b5-442a-9b20-57dfff95be9b"),
    ("product.paspoort", "e332a405-5d6e-4e6f-b0c6-05c6f30f54c0"),
    ("product.rijbewijs", "54e1ee3d-ed5a-4c0f-abe7-38f02a7c4306"),
    ("product.identiteitskaart", "fab3d300-c321-4b05-af85-345b31eb2bfe"),
    ("product.geboorte-aangifte", "7abbf16d-b6f4-4e27-bb42-35ce6919f7ec"),
    ("offer.paspoort-aanvragen", "840df85b-638d-4e97-928f-30d0aa010982"),
    ("offer.paspoort-gestolen", "1b899d19-9e66-4b31-ad12-bf581d50ca6f"),
    ("offer.rijbewijs-aanvragen", "b409aba2-1cf4-48a3-a934-e168e26e5f09"),
    ("offer.rijbewijs-gestolen", "7607b93d-c743-46ab-9314-e38dafa577c1"),
    ("offer.identiteitskaart-aanvragen", "4c264c6d-1048-41e8-8cd8-b9eb1e65973a"),
    ("offer.identiteitskaart-gestolen", "d6bb4e1f-dbfb-4199-a398-2c754d051416"),
    ("offer.geboorte-aangifte", "ff0d3a09-5d50-4133-b0b1-c434900a83e2"),
]);

pub const WEST_FRIESLAND: IdTable = IdTable::new(&[
    ("catalogue.sed", "0af16230-847f-4d60-8019-b0f0c3ce584d"),
    ("catalogue.hoorn", "1fadd30f-442d-4a74-846f-81aa907695ac"),
    ("catalogue.medemblik", "64f697a8-a57a-434a-ab28-2ac496064f48"),
    ("catalogue.koggenland", "734240a9-4bf9-4567-b055-99eadfa70b55"),
    ("catalogue.opmeer", "cf312524-51aa-48b6-8c67-74f0e0bb7091"),
    ("product.wk-diversen", "29c81fb5-3df5-48a3-80a2-e52480983e56"),
    ("product.wk-bijzettingsartikelen", "1b775822-7a8d-4848-a455-408a0365a9bf"),
    ("product.oo-diversen", "32ccfa18-4dbc-4895-8d5a-b25a982c28e3"),
    ("product.oo-asartikelen", "aa995cc0-d3fd-4869-9d04-07be32ab172f"),
    ("offer.wk-orgel", "f791ae50-c471-40e9-8ac9-53975c89b328"),
    ("offer.wk-koffiekamer", "576550f6-aca2-42e0-a994-7625f427d0e1"),
    ("offer.wk-cd-speler", "3a7f1f81-94d3-49f6-86d3-3d1479277632"),
    ("offer.wk-bijzetting-urn", "b385925a-0b44-45f1-9ac2-930329b00916"),
    ("offer.wk-bijzetting-asbus", "ccaae856-1060-4d25-8537-b4ac11fd06c3"),
    ("offer.oo-orgel", "72183cad-0023-44f5-b743-d0c7eb8f3745"),
    ("offer.oo-koffiekamer", "940a4bc2-f7c1-4d39-9764-32d36aa0c26a"),
    ("offer.oo-cd-speler", "61ced7cd-1b30-444b-b46d-d1fa49b05ab1"),
    ("offer.oo-asverstrooiing", "5bbe119d-718c-4b04-82df-63495854b4f4"),
    ("group.wk-diversen", "b939de43-9c04-4d5e-81e8-2f4d5054fe83"),
    ("group.wk-bijzettingsartikelen", "9f9a78cb-f708-447f-8795-23f6cf13c39d"),
    ("group.oo-diversen", "fa842893-8c8b-4acf-b1eb-284e3ea34083"),
    ("group.oo-asartikelen", "bae59b6b-4866-4476-ad87-6246f488c1b4"),
]);

pub const UTRECHT: IdTable = IdTable::new(&[
    ("catalogue.vng", "2d2e2a3c-6e0f-4f87-9a59-2c6d0e1b7a41"),
    ("catalogue.den-bosch", "8b1f5c7e-3d2a-4c9b-b6e4-5f0a1d2c3e84"),
    ("catalogue.eindhoven", "c4a9e7d2-1b3f-4e6a-8d5c-7f2b0a9e1d63"),
    ("catalogue.utrecht", "5e7d3b1a-9c2f-4a8e-b0d4-6c1f3e5a7b92"),
    ("group.burgerzaken-den-bosch", "5a6a1219-1e2d-4dc5-aa03-82ffe1ff6249"),
    ("group.burgerzaken-eindhoven", "d1cc2c8c-c87d-4bb1-b468-9546b4ce29a5"),
    ("group.burgerzaken-utrecht", "1138c620-223e-4def-ac84-f21a46369d56"),
    ("group.trouwen", "0c1f993d-f9e2-46c5-8d83-0b6dfb702069"),
    ("group.trouwambtenaren", "7f4ff7ae-ed1b-45c9-9a73-3ed06a36b9cc"),
    ("group.trouwlocaties", "170788e7-b238-4c28-8efc-97bdada02c2e"),
    ("group.ceremonies", "1cad775c-c2d0-48af-858f-a12029af24b3"),
    ("group.extra", "f8298a12-91eb-46d0-b8a9-e7095f81be6f"),
    ("product.trouwen-partnerschap", "d1a8b316-5966-4a29-8cf7-be15b8302301"),
    ("product.eenvoudig-trouwen", "16353702-4614-42ff-92af-7dd11c8eef9f"),
    ("product.gratis-trouwen", "190c3611-010d-4b0e-a31c-60dadf4d1c62"),
    ("product.erik-hendrik", "1edd4d62-d778-452a-8b2a-ac22f3dcdf4d"),
    ("product.ike-van-den-pol", "477ea744-47b1-4690-bd2e-c9c15d5cf2d4"),
    ("product.rene-gulje", "4f7c5d73-0fcb-4363-9ebb-fd47e2209148"),
    ("product.toegewezen-trouwambtenaar", "55af09c8-361b-418a-af87-df8f8827984b"),
    ("product.stagair-trouwambtenaar", "ea984e7b-0d0d-48ff-86ea-bd5d15286ae7"),
    ("product.stadskantoor", "7a3489d5-2d2c-454b-91c9-caff4fed897f"),
    ("product.stadhuis-kleine-zaal", "7ebcc7a9-ce12-401b-b3a1-18497c54d79d"),
    ("product.stadhuis-grote-zaal", "9d7c1c5b-3e65-4429-90ec-16e7371f2360"),
    ("product.vrije-locatie", "c7b556bb-a2f0-471c-9ff9-37543bc4d843"),
    ("product.trouwboekje", "d7bd202b-27ae-4c09-aeb9-3806c5fba504"),
    ("product.ringen", "1fa3fbbc-0dee-442a-8431-3381b8cbc78a"),
    ("product.geen-extras", "a6bbfcb3-e87d-4f6f-98da-821b71e45912"),
]);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shipped_tables_are_consistent() {
        for table in [ZUID_DRECHT, WEST_FRIESLAND, UTRECHT] {
            table.validate().unwrap();
        }
    }

    #[test]
    fn lookup_by_logical_key() {
        assert_eq!(
            ZUID_DRECHT.require("group.diensten").unwrap().to_string(),
            "bbc03703-27b5-442a-9b20-57dfff95be9b"
        );
        assert_eq!(ZUID_DRECHT.get("group.unknown").unwrap(), None);
        assert!(ZUID_DRECHT.require("group.unknown").is_err());
    }

    #[test]
    fn validate_rejects_duplicate_keys_and_ids() {
        const DUP_KEY: IdTable = IdTable::new(&[
            ("a", "1baea858-1512-454b-ad58-0d30ac5ef10e"),
            ("a", "b2e220b6-9f5c-45b4-84ec-8727123df185"),
        ]);
        const DUP_ID: IdTable = IdTable::new(&[
            ("a", "1baea858-1512-454b-ad58-0d30ac5ef10e"),
            ("b", "1baea858-1512-454b-ad58-0d30ac5ef10e"),
        ]);
        const BAD: IdTable = IdTable::new(&[("a", "nope")]);
        assert!(DUP_KEY.validate().is_err());
        assert!(DUP_ID.validate().is_err());
        assert!(matches!(BAD.get("a"), Err(DomainError::InvalidId(_))));
    }
}
