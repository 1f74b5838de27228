use crate::utils::error::{Field, FieldError};
use crate::utils::validation::{validate_non_empty_string, validate_positive};
use serde::{Deserialize, Serialize};

/// One teacher entry. Field order is the serialization order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawDocente")]
pub struct Docente {
    #[serde(rename = "nombre")]
    name: String,
    #[serde(rename = "especialidad")]
    specialty: String,
    #[serde(rename = "numero_empleado")]
    employee_number: u64,
}

impl Docente {
    pub fn new(
        name: &str,
        specialty: &str,
        employee_number: u64,
    ) -> Result<Self, FieldError> {
        Ok(Self {
            name: validate_non_empty_string(Field::Name, name)?,
            specialty: validate_non_empty_string(Field::Specialty, specialty)?,
            employee_number: validate_positive(employee_number)?,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn specialty(&self) -> &str {
        &self.specialty
    }

    pub fn employee_number(&self) -> u64 {
        self.employee_number
    }
}

#[derive(Deserialize)]
struct RawDocente {
    nombre: String,
    especialidad: String,
    numero_empleado: u64,
}

impl TryFrom<RawDocente> for Docente {
    type Error = FieldError;

    fn try_from(raw: RawDocente) -> Result<Self, Self::Error> {
        Docente::new(&raw.nombre, &raw.especialidad, raw.numero_empleado)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_trims_and_validates() {
        let docente = Docente::new("  Ana Pérez ", "Matemáticas\t", 101).unwrap();
        assert_eq!(docente.name(), "Ana Pérez");
        assert_eq!(docente.specialty(), "Matemáticas");
        assert_eq!(docente.employee_number(), 101);

        assert_eq!(
            Docente::new(" ", "Física", 1),
            Err(FieldError::Empty(Field::Name))
        );
        assert_eq!(
            Docente::new("Luis", "", 1),
            Err(FieldError::Empty(Field::Specialty))
        );
        assert_eq!(Docente::new("Luis", "Física", 0), Err(FieldError::NotPositive));
    }

    #[test]
    fn test_serialized_keys_follow_field_order() {
        let docente = Docente::new("Luis Gómez", "Física", 102).unwrap();
        let json = serde_json::to_string(&docente).unwrap();
        assert_eq!(
            json,
            r#"{"nombre":"Luis Gómez","especialidad":"Física","numero_empleado":102}"#
        );
    }

    #[test]
    fn test_deserialize_rejects_invalid_records() {
        let invalid = r#"{"nombre":"  ","especialidad":"Física","numero_empleado":3}"#;
        assert!(serde_json::from_str::<Docente>(invalid).is_err());

        let zero = r#"{"nombre":"Luis","especialidad":"Física","numero_empleado":0}"#;
        assert!(serde_json::from_str::<Docente>(zero).is_err());
    }
}
