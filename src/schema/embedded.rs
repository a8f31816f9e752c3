//! Embedded schemas for the four mutuelle collections.
//!
//! The schemas are compiled into the library as static JSON strings, so the
//! server needs no external schema files. Field names follow the wire format
//! of the records themselves; `_id` is not declared here because it is
//! assigned by the server, never accepted from clients.

/// Returns the agents schema as a JSON string.
pub fn agent_schema() -> &'static str {
    r#"{
  "collection": "agents",
  "name": "Agent",
  "description": "Employee covered by the mutuelle",
  "attributes": [
    { "name": "matricule", "type": "string", "required": true },
    { "name": "nom", "type": "string", "required": true },
    { "name": "prenom", "type": "string", "required": true },
    { "name": "age", "type": "integer", "required": true },
    { "name": "address", "type": "string", "required": true },
    { "name": "tele", "type": "string", "required": true }
  ],
  "example": {
    "matricule": "1",
    "nom": "Name 1",
    "prenom": "First Name 1",
    "age": 25,
    "address": "Adresse 1",
    "tele": "041981545"
  }
}"#
}

/// Returns the medecins schema as a JSON string.
pub fn medecin_schema() -> &'static str {
    r#"{
  "collection": "medecins",
  "name": "Medecin",
  "description": "Doctor referenced by dossiers",
  "attributes": [
    { "name": "speciality", "type": "string", "required": true },
    { "name": "nom", "type": "string", "required": true },
    { "name": "prenom", "type": "string", "required": true },
    { "name": "address", "type": "string", "required": true },
    { "name": "tele", "type": "string", "required": true }
  ],
  "example": {
    "speciality": "Speciality 1",
    "nom": "Name 1",
    "prenom": "First Name 1",
    "address": "Adresse 1",
    "tele": "Télé 1"
  }
}"#
}

/// Returns the pharmacies schema as a JSON string.
pub fn pharmacie_schema() -> &'static str {
    r#"{
  "collection": "pharmacies",
  "name": "Pharmacie",
  "description": "Partner pharmacy",
  "attributes": [
    { "name": "nom", "type": "string", "required": true },
    { "name": "address", "type": "string", "required": true },
    { "name": "tele", "type": "string", "required": true }
  ],
  "example": {
    "nom": "Name 1",
    "address": "Adresse 1",
    "tele": "Télé 1"
  }
}"#
}

/// Returns the dossiers schema as a JSON string.
///
/// `matricule` and `medecinId` reference an agent and a medecin by value;
/// neither reference is checked against the other collections.
pub fn dossier_schema() -> &'static str {
    r#"{
  "collection": "dossiers",
  "name": "Dossier",
  "description": "Reimbursement case file",
  "attributes": [
    { "name": "matricule", "type": "string", "required": true },
    { "name": "medecinId", "type": "string", "required": true },
    { "name": "maladie", "type": "string", "required": true },
    { "name": "montant", "type": "decimal", "required": true },
    { "name": "date", "type": "string", "required": true }
  ],
  "example": {
    "matricule": "1",
    "medecinId": "5f9f1b9c1c9d440000f1b5f5",
    "maladie": "Maladie 1",
    "montant": 1000.0,
    "date": "2020-10-27"
  }
}"#
}

/// All embedded schemas in registration order.
pub fn all_schemas() -> [&'static str; 4] {
    [
        agent_schema(),
        medecin_schema(),
        pharmacie_schema(),
        dossier_schema(),
    ]
}
