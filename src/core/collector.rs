use crate::domain::model::Docente;
use crate::utils::error::{Field, FieldError, RegistroError, Result};
use crate::utils::validation::{validate_employee_number, validate_non_empty_string};
use std::io::{BufRead, Write};

pub const BANNER: &str = "=== SISTEMA DE REGISTRO DE DOCENTES - EDIFICIO 2 ===";
const RECORD_HEADER: &str = "--- Ingresar datos del docente ---";
const NAME_PROMPT: &str = "Nombre del empleado: ";
const SPECIALTY_PROMPT: &str = "Especialidad: ";
const NUMBER_PROMPT: &str = "Número de empleado: ";
const CONTINUE_PROMPT: &str = "¿Desea ingresar otro docente? (s/n): ";
const CONTINUE_TOKEN: &str = "s";

/// Interactive record entry over any line-oriented input.
///
/// Every prompt is retried until its validator accepts the answer, so the
/// returned list only ever holds valid records.
pub struct Collector<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Collector<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn into_output(self) -> W {
        self.output
    }

    pub fn collect(&mut self) -> Result<Vec<Docente>> {
        let mut docentes = Vec::new();

        writeln!(self.output, "{}", BANNER).map_err(RegistroError::TerminalError)?;

        loop {
            writeln!(self.output, "\n{}", RECORD_HEADER).map_err(RegistroError::TerminalError)?;

            // EOF before a new record starts ends collection normally.
            let name = match self.prompt_until(NAME_PROMPT, |answer| {
                validate_non_empty_string(Field::Name, answer)
            })? {
                Some(name) => name,
                None => {
                    tracing::debug!("Input exhausted, stopping collection");
                    break;
                }
            };

            let specialty = self
                .prompt_until(SPECIALTY_PROMPT, |answer| {
                    validate_non_empty_string(Field::Specialty, answer)
                })?
                .ok_or(RegistroError::InputClosed)?;

            let employee_number = self
                .prompt_until(NUMBER_PROMPT, validate_employee_number)?
                .ok_or(RegistroError::InputClosed)?;

            let docente = Docente::new(&name, &specialty, employee_number).map_err(|source| {
                RegistroError::ValidationError {
                    field: "docente".to_string(),
                    source,
                }
            })?;
            tracing::debug!(
                "Accepted record #{}: {} ({})",
                docentes.len() + 1,
                docente.name(),
                docente.employee_number()
            );
            docentes.push(docente);

            let answer = self.read_answer(&format!("\n{}", CONTINUE_PROMPT))?;
            let keep_going = answer
                .map(|a| a.trim().eq_ignore_ascii_case(CONTINUE_TOKEN))
                .unwrap_or(false);
            if !keep_going {
                break;
            }
        }

        tracing::info!("Collected {} records", docentes.len());
        Ok(docentes)
    }

    /// Re-prompts until `validate` accepts. `None` means the input ended.
    fn prompt_until<T, F>(&mut self, prompt: &str, validate: F) -> Result<Option<T>>
    where
        F: Fn(&str) -> std::result::Result<T, FieldError>,
    {
        loop {
            let Some(answer) = self.read_answer(prompt)? else {
                return Ok(None);
            };

            match validate(&answer) {
                Ok(value) => return Ok(Some(value)),
                Err(e) => {
                    tracing::debug!("Rejected input {:?}: {}", answer.trim(), e);
                    writeln!(self.output, "Error: {}", e).map_err(RegistroError::TerminalError)?;
                }
            }
        }
    }

    fn read_answer(&mut self, prompt: &str) -> Result<Option<String>> {
        write!(self.output, "{}", prompt).map_err(RegistroError::TerminalError)?;
        self.output.flush().map_err(RegistroError::TerminalError)?;

        let mut line = String::new();
        let read = self
            .input
            .read_line(&mut line)
            .map_err(RegistroError::TerminalError)?;
        if read == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::error::ErrorCategory;
    use std::io::Cursor;

    fn run(script: &str) -> (Result<Vec<Docente>>, String) {
        let mut collector = Collector::new(Cursor::new(script.to_string()), Vec::new());
        let result = collector.collect();
        let output = String::from_utf8(collector.into_output()).unwrap();
        (result, output)
    }

    #[test]
    fn test_collects_two_records_in_order() {
        let (result, _) = run("Ana Pérez\nMatemáticas\n101\ns\nLuis Gómez\nFísica\n102\nn\n");
        let docentes = result.unwrap();
        assert_eq!(docentes.len(), 2);
        assert_eq!(docentes[0], Docente::new("Ana Pérez", "Matemáticas", 101).unwrap());
        assert_eq!(docentes[1], Docente::new("Luis Gómez", "Física", 102).unwrap());
    }

    #[test]
    fn test_rejects_bad_employee_numbers_until_positive() {
        let (result, output) = run("Ana\nQuímica\nabc\n-5\n7\nn\n");
        let docentes = result.unwrap();
        assert_eq!(docentes.len(), 1);
        assert_eq!(docentes[0].employee_number(), 7);
        assert_eq!(output.matches("Error: Debe ingresar un número válido").count(), 1);
        assert_eq!(
            output.matches("Error: El número de empleado debe ser positivo").count(),
            1
        );
        assert_eq!(output.matches(NUMBER_PROMPT).count(), 3);
    }

    #[test]
    fn test_reprompts_blank_name_and_specialty() {
        let (result, output) = run("   \n  Ana  \n\n Historia \n1\nN\n");
        let docentes = result.unwrap();
        assert_eq!(docentes[0].name(), "Ana");
        assert_eq!(docentes[0].specialty(), "Historia");
        assert!(output.contains("Error: El nombre no puede estar vacío"));
        assert!(output.contains("Error: La especialidad no puede estar vacía"));
    }

    #[test]
    fn test_continue_answer_is_case_insensitive() {
        let (result, _) = run("Ana\nArte\n1\nS\nLuis\nArte\n1\nno\n");
        // Duplicate employee numbers are allowed.
        assert_eq!(result.unwrap().len(), 2);
    }

    #[test]
    fn test_anything_but_s_stops_collection() {
        let (result, _) = run("Ana\nArte\n1\nsi\nLuis\nArte\n2\nn\n");
        assert_eq!(result.unwrap().len(), 1);
    }

    #[test]
    fn test_empty_input_yields_no_records() {
        let (result, output) = run("");
        assert!(result.unwrap().is_empty());
        assert!(output.contains(BANNER));
    }

    #[test]
    fn test_input_closed_mid_record_is_an_error() {
        let (result, _) = run("Ana\nArte\n");
        assert!(matches!(result, Err(RegistroError::InputClosed)));
    }

    #[test]
    fn test_invalid_utf8_is_a_terminal_failure() {
        let mut collector = Collector::new(Cursor::new(b"\xff\n".to_vec()), Vec::new());
        let err = collector.collect().unwrap_err();
        assert!(matches!(err, RegistroError::TerminalError(_)));
        assert_eq!(err.category(), ErrorCategory::Unexpected);
    }

    #[test]
    fn test_eof_at_continuation_keeps_records() {
        let (result, _) = run("Ana\nArte\n12");
        assert_eq!(result.unwrap().len(), 1);
    }
}
