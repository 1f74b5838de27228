use crate::domain::model::Docente;
use std::fmt::Write as _;
use std::io::{self, Write};

pub const RULE: &str = "==================================================";

pub fn render_summary(docentes: &[Docente]) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "\n{}", RULE);
    let _ = writeln!(out, "RESUMEN DE DOCENTES REGISTRADOS");
    let _ = writeln!(out, "{}", RULE);

    for (i, docente) in docentes.iter().enumerate() {
        let _ = writeln!(out, "\nDocente {}:", i + 1);
        let _ = writeln!(out, "  Nombre: {}", docente.name());
        let _ = writeln!(out, "  Especialidad: {}", docente.specialty());
        let _ = writeln!(out, "  Número de empleado: {}", docente.employee_number());
    }

    out
}

pub fn print_summary<W: Write>(docentes: &[Docente], out: &mut W) -> io::Result<()> {
    out.write_all(render_summary(docentes).as_bytes())?;
    out.flush()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_enumerates_from_one() {
        let docentes = vec![
            Docente::new("Ana Pérez", "Matemáticas", 101).unwrap(),
            Docente::new("Luis Gómez", "Física", 102).unwrap(),
        ];
        let summary = render_summary(&docentes);

        assert!(summary.contains("RESUMEN DE DOCENTES REGISTRADOS"));
        assert!(summary.contains(
            "Docente 1:\n  Nombre: Ana Pérez\n  Especialidad: Matemáticas\n  Número de empleado: 101"
        ));
        assert!(summary.contains("Docente 2:\n  Nombre: Luis Gómez"));
        assert!(!summary.contains("Docente 3:"));
    }

    #[test]
    fn test_print_summary_writes_rendered_text() {
        let docentes = vec![Docente::new("Ana", "Arte", 1).unwrap()];
        let mut buf = Vec::new();
        print_summary(&docentes, &mut buf).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), render_summary(&docentes));
    }
}
