//! Interactive eight-choice menu.
//!
//! The loop is generic over its input and output so tests can drive it with
//! in-memory buffers. End of input behaves like choosing "Salir".

use std::fmt;
use std::io::{BufRead, Write};

use agro_core::responses::EquipmentDetails;
use agro_registry::error::RegistryError;

use crate::context::AppContext;
use crate::output::text;

const FAREWELL: &str = "Gracias por usar el sistema, que te vaya bien!";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MenuChoice {
    ListAll,
    FindByCode,
    FindByName,
    SortByPower,
    Statistics,
    Details,
    Exercise,
    Exit,
}

impl MenuChoice {
    pub const ALL: [Self; 8] = [
        Self::ListAll,
        Self::FindByCode,
        Self::FindByName,
        Self::SortByPower,
        Self::Statistics,
        Self::Details,
        Self::Exercise,
        Self::Exit,
    ];

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::ListAll => "Ver todos los equipos",
            Self::FindByCode => "Buscar equipo por código",
            Self::FindByName => "Buscar equipo por nombre",
            Self::SortByPower => "Ordenar por consumo eléctrico",
            Self::Statistics => "Ver estadísticas",
            Self::Details => "Ver detalles de un equipo",
            Self::Exercise => "Probar capacidades de un equipo",
            Self::Exit => "Salir",
        }
    }

    /// Parse one line of user input.
    ///
    /// # Errors
    ///
    /// `NotANumber` for anything that is not an integer, `OutOfRange` for
    /// integers outside `1..=8`.
    pub fn parse(input: &str) -> Result<Self, ChoiceError> {
        let number: i64 = input.trim().parse().map_err(|_| ChoiceError::NotANumber)?;
        usize::try_from(number)
            .ok()
            .and_then(|n| n.checked_sub(1))
            .and_then(|index| Self::ALL.get(index).copied())
            .ok_or(ChoiceError::OutOfRange(number))
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ChoiceError {
    NotANumber,
    OutOfRange(i64),
}

impl fmt::Display for ChoiceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotANumber => f.write_str("Eh! Tenés que ingresar un número, no otra cosa."),
            Self::OutOfRange(_) => f.write_str("Uy! Esa opción no existe, probá de nuevo."),
        }
    }
}

/// Run the menu until the user picks "Salir" or input ends.
pub fn run<R: BufRead, W: Write>(ctx: &mut AppContext, input: R, output: W) -> anyhow::Result<()> {
    Menu { ctx, input, output }.run()
}

struct Menu<'a, R, W> {
    ctx: &'a mut AppContext,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Menu<'_, R, W> {
    fn run(&mut self) -> anyhow::Result<()> {
        writeln!(self.output, "{}", heading("Sistema de gestión agro-tecnológica"))?;
        writeln!(
            self.output,
            "Listo! Tenemos {} equipos en el sistema.",
            self.ctx.service.count()
        )?;

        loop {
            self.print_menu()?;
            let Some(line) = self.read_line()? else {
                writeln!(self.output, "\n{FAREWELL}")?;
                break;
            };

            match MenuChoice::parse(&line) {
                Ok(MenuChoice::Exit) => {
                    writeln!(self.output, "\n{FAREWELL}")?;
                    break;
                }
                Ok(choice) => {
                    tracing::debug!(?choice, "menu choice");
                    self.handle(choice)?;
                }
                Err(error) => writeln!(self.output, "\n{error}")?,
            }
        }

        self.output.flush()?;
        Ok(())
    }

    fn print_menu(&mut self) -> anyhow::Result<()> {
        writeln!(self.output)?;
        for (index, choice) in MenuChoice::ALL.iter().enumerate() {
            writeln!(self.output, "{}. {}", index + 1, choice.label())?;
        }
        self.prompt("¿Qué querés hacer? ")
    }

    fn handle(&mut self, choice: MenuChoice) -> anyhow::Result<()> {
        writeln!(self.output, "\n{}\n", heading(choice.label()))?;
        match choice {
            MenuChoice::ListAll => {
                let records = self.ctx.service.list_all();
                writeln!(self.output, "{}", text::equipment_listing(&records))?;
            }
            MenuChoice::FindByCode => self.find_by_code()?,
            MenuChoice::FindByName => self.find_by_name()?,
            MenuChoice::SortByPower => {
                let records = self.ctx.service.sorted_by_power();
                writeln!(self.output, "{}", text::power_ranking(&records))?;
            }
            MenuChoice::Statistics => writeln!(self.output, "{}", self.ctx.service.stats())?,
            MenuChoice::Details => self.details()?,
            MenuChoice::Exercise => self.exercise()?,
            MenuChoice::Exit => {}
        }
        Ok(())
    }

    fn find_by_code(&mut self) -> anyhow::Result<()> {
        let Some(code) = self.ask("Código del equipo: ")? else {
            return Ok(());
        };
        match self.ctx.service.find_by_code(&code) {
            Some(equipment) => {
                writeln!(self.output, "\nLo encontramos!\n\n{}", equipment.summary())?;
            }
            None => writeln!(self.output, "\n{}", text::not_found(&code))?,
        }
        Ok(())
    }

    fn find_by_name(&mut self) -> anyhow::Result<()> {
        let Some(needle) = self.ask("¿Qué parte del nombre sabés? ")? else {
            return Ok(());
        };
        let records = self.ctx.service.find_by_name(&needle);
        writeln!(self.output, "\n{}", text::search_results(&needle, &records))?;
        Ok(())
    }

    fn details(&mut self) -> anyhow::Result<()> {
        let Some(code) = self.ask("¿Cuál código querés ver? ")? else {
            return Ok(());
        };
        match self.ctx.service.find_by_code(&code) {
            Some(equipment) => {
                let details = EquipmentDetails::from(equipment);
                writeln!(self.output, "\n{}", text::details(&details))?;
            }
            None => writeln!(self.output, "\n{}", text::not_found(&code))?,
        }
        Ok(())
    }

    /// Measure, then act, then show the logbook, for whichever of those the
    /// record supports. The instruction is asked for between the first two.
    fn exercise(&mut self) -> anyhow::Result<()> {
        let Some(code) = self.ask("¿Cuál código probamos? ")? else {
            return Ok(());
        };
        let report = match self.ctx.service.exercise(&code, None, 0) {
            Ok(report) => report,
            Err(RegistryError::UnknownCode(code)) => {
                writeln!(self.output, "\n{}", text::not_found(&code))?;
                return Ok(());
            }
            Err(error) => return Err(error.into()),
        };
        writeln!(self.output, "\nVamos a probar: {}", report.name)?;

        if let Some(reading) = &report.reading {
            writeln!(self.output, "\n[Medición]\n{reading}")?;
        }

        if !report.vocabulary.is_empty() {
            writeln!(self.output, "\n[Ejecución]\nComandos disponibles:")?;
            for info in &report.vocabulary {
                writeln!(self.output, "  - {}: {}", info.keyword, info.description)?;
            }
            if let Some(instruction) = self.ask("\n¿Qué comando le mandamos? ")? {
                let outcome = self.ctx.service.perform_operation(&report.code, &instruction)?;
                if outcome.accepted {
                    writeln!(self.output, "✓ Listo, se ejecutó. Estado: {}", outcome.status)?;
                } else {
                    writeln!(
                        self.output,
                        "✗ No se pudo hacer eso. Estado: {}",
                        outcome.status
                    )?;
                }
            }
        }

        let log = self
            .ctx
            .service
            .log_summary(&report.code, self.ctx.config.general.log_tail)?;
        if let Some((tail, total)) = &log {
            write!(self.output, "{}", text::log_section(tail, *total))?;
        }

        if report.reading.is_none() && report.vocabulary.is_empty() && log.is_none() {
            writeln!(self.output, "\nEste equipo no tiene capacidades para probar.")?;
        }
        Ok(())
    }

    fn prompt(&mut self, message: &str) -> anyhow::Result<()> {
        write!(self.output, "{message}")?;
        self.output.flush()?;
        Ok(())
    }

    /// Prompt and read a trimmed line. `None` at end of input.
    fn ask(&mut self, message: &str) -> anyhow::Result<Option<String>> {
        self.prompt(message)?;
        self.read_line()
    }

    fn read_line(&mut self) -> anyhow::Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }
}

fn heading(title: &str) -> String {
    let rule = "═".repeat(title.chars().count() + 4);
    format!("{rule}\n  {title}\n{rule}")
}
