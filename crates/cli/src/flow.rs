//! Interactive selection flow.
//!
//! plan -> member count -> features -> group savings -> premium tier ->
//! summary -> confirmation. Cancelling at any prompt (or running out of input)
//! aborts with [`CANCELLED`]; declining the confirmation starts over.

use std::io::{self, BufRead, Write};

use gymfee_core::{DomainError, ValidationErrorKind};
use gymfee_membership::{PremiumTier, PricingEngine, Selection};

/// Returned when the flow is cancelled or hits invalid input.
pub const CANCELLED: i64 = -1;

const RULE_WIDTH: usize = 60;

enum Prompt<T> {
    Value(T),
    Cancel,
}

enum Outcome {
    Confirmed(i64),
    Declined,
    Cancelled,
    Invalid(DomainError),
}

/// Unwrap a prompt answer or bail out of the attempt as cancelled.
macro_rules! answer {
    ($prompt:expr) => {
        match $prompt? {
            Prompt::Value(v) => v,
            Prompt::Cancel => return Ok(Outcome::Cancelled),
        }
    };
}

/// Unwrap an engine result or bail out of the attempt as invalid.
macro_rules! checked {
    ($result:expr) => {
        match $result {
            Ok(v) => v,
            Err(e) => return Ok(Outcome::Invalid(e)),
        }
    };
}

pub struct InteractiveFlow<'e, R, W> {
    engine: &'e PricingEngine,
    input: R,
    output: W,
}

impl<'e, R: BufRead, W: Write> InteractiveFlow<'e, R, W> {
    pub fn new(engine: &'e PricingEngine, input: R, output: W) -> Self {
        Self {
            engine,
            input,
            output,
        }
    }

    pub fn into_output(self) -> W {
        self.output
    }

    /// Run until the user confirms (truncated total) or cancels ([`CANCELLED`]).
    pub fn run(&mut self) -> io::Result<i64> {
        loop {
            self.welcome()?;
            match self.attempt()? {
                Outcome::Confirmed(total) => return Ok(total),
                Outcome::Declined => {
                    tracing::info!("membership declined, restarting selection");
                    writeln!(self.output, "Membership selection canceled. Starting over...\n")?;
                }
                Outcome::Cancelled => {
                    tracing::info!("membership selection cancelled");
                    writeln!(self.output, "Membership selection canceled.\n")?;
                    return Ok(CANCELLED);
                }
                Outcome::Invalid(e) => {
                    tracing::warn!(error = %e, kind = ?e.kind(), "membership selection rejected");
                    writeln!(self.output, "Error: {e}\n")?;
                    return Ok(CANCELLED);
                }
            }
        }
    }

    fn attempt(&mut self) -> io::Result<Outcome> {
        let plan = answer!(self.select_plan());
        checked!(self.engine.validate_plan(&plan));

        let member_count = answer!(self.select_member_count());

        let features = answer!(self.select_features());
        checked!(self.engine.validate_features(&features));

        checked!(self.show_group_savings(&plan, member_count)?);

        let premium_tier = answer!(self.select_premium_tier());

        let selection = Selection {
            plan,
            features,
            member_count,
            premium_tier,
        };
        checked!(self.engine.validate_selection(&selection));

        let summary = checked!(self.engine.selection_summary(&selection));
        if !answer!(self.confirm(&summary)) {
            return Ok(Outcome::Declined);
        }

        let quote = checked!(self.engine.quote(&selection));
        tracing::info!(
            plan = %selection.plan,
            member_count = selection.member_count,
            premium_tier = %selection.premium_tier,
            total = quote.total,
            "membership confirmed"
        );
        writeln!(self.output, "\nMembership confirmed! Total cost: ${:.2}\n", quote.total)?;

        Ok(Outcome::Confirmed(quote.truncated_total()))
    }

    fn welcome(&mut self) -> io::Result<()> {
        writeln!(self.output, "\n{}", "=".repeat(RULE_WIDTH))?;
        writeln!(
            self.output,
            "{:^RULE_WIDTH$}",
            "WELCOME TO GYM MEMBERSHIP MANAGEMENT SYSTEM"
        )?;
        writeln!(self.output, "{}\n", "=".repeat(RULE_WIDTH))
    }

    fn select_plan(&mut self) -> io::Result<Prompt<String>> {
        let names: Vec<String> = self
            .engine
            .available_plans()
            .iter()
            .map(|p| p.name().to_string())
            .collect();

        writeln!(self.output, "\nAvailable Membership Plans:")?;
        writeln!(self.output, "{}", "-".repeat(RULE_WIDTH))?;
        for (i, plan) in self.engine.available_plans().iter().enumerate() {
            writeln!(self.output, "{}. {}", i + 1, plan)?;
        }
        writeln!(self.output)?;

        if names.is_empty() {
            writeln!(self.output, "No membership plans are currently available.")?;
            return Ok(Prompt::Cancel);
        }

        loop {
            let Some(input) = self.read_input("Enter membership plan name or number (or 'cancel' to exit): ")? else {
                return Ok(Prompt::Cancel);
            };

            if input.eq_ignore_ascii_case("cancel") {
                return Ok(Prompt::Cancel);
            }

            if let Some(name) = pick(&names, &input) {
                return Ok(Prompt::Value(name.to_string()));
            }

            if is_number(&input) {
                writeln!(
                    self.output,
                    "Invalid selection. Please enter a number between 1 and {}.\n",
                    names.len()
                )?;
            } else {
                writeln!(
                    self.output,
                    "Invalid membership plan. Please select from: {}\n",
                    names.join(", ")
                )?;
            }
        }
    }

    fn select_member_count(&mut self) -> io::Result<Prompt<u32>> {
        let rules = self.engine.rules();
        let prompt = format!(
            "Enter number of members ({}-{}) or 'cancel' to exit: ",
            rules.min_members, rules.max_members
        );

        loop {
            let Some(input) = self.read_input(&prompt)? else {
                return Ok(Prompt::Cancel);
            };

            if input.eq_ignore_ascii_case("cancel") {
                return Ok(Prompt::Cancel);
            }

            match self.engine.parse_member_count(&input) {
                Ok(n) => return Ok(Prompt::Value(n)),
                Err(e) if e.kind() == ValidationErrorKind::InvalidInput => {
                    writeln!(self.output, "Please enter a valid number.\n")?;
                }
                Err(e) => writeln!(self.output, "Error: {e}\n")?,
            }
        }
    }

    fn select_features(&mut self) -> io::Result<Prompt<Vec<String>>> {
        let names: Vec<String> = self
            .engine
            .available_features()
            .iter()
            .map(|f| f.name().to_string())
            .collect();

        writeln!(self.output, "\nAvailable Additional Features:")?;
        writeln!(self.output, "{}", "-".repeat(RULE_WIDTH))?;
        for (i, feature) in self.engine.available_features().iter().enumerate() {
            writeln!(self.output, "{}. {}", i + 1, feature)?;
        }
        writeln!(self.output)?;

        let mut selected: Vec<String> = Vec::new();

        loop {
            let current = if selected.is_empty() {
                "None".to_string()
            } else {
                selected.join(", ")
            };
            writeln!(self.output, "Currently selected features: {current}")?;

            let Some(input) =
                self.read_input("Enter feature name/number to add/remove, or 'done' to continue: ")?
            else {
                return Ok(Prompt::Cancel);
            };

            if input.eq_ignore_ascii_case("done") {
                return Ok(Prompt::Value(selected));
            }
            if input.eq_ignore_ascii_case("cancel") {
                return Ok(Prompt::Cancel);
            }

            let Some(name) = pick(&names, &input) else {
                if is_number(&input) {
                    writeln!(
                        self.output,
                        "Invalid selection. Please enter a number between 1 and {}.\n",
                        names.len()
                    )?;
                } else {
                    writeln!(
                        self.output,
                        "Invalid feature. Please select from: {}\n",
                        names.join(", ")
                    )?;
                }
                continue;
            };

            if let Some(pos) = selected.iter().position(|s| s == name) {
                selected.remove(pos);
                writeln!(self.output, "Removed: {name}\n")?;
            } else {
                selected.push(name.to_string());
                writeln!(self.output, "Added: {name}\n")?;
            }
        }
    }

    fn show_group_savings(&mut self, plan: &str, member_count: u32) -> io::Result<Result<(), DomainError>> {
        let rules = self.engine.rules();
        if member_count < rules.group_discount_threshold {
            return Ok(Ok(()));
        }

        let rate = rules.group_discount_rate;
        let savings = match self.engine.group_savings(plan, member_count) {
            Ok(s) => s,
            Err(e) => return Ok(Err(e)),
        };

        writeln!(
            self.output,
            "\nGROUP SAVINGS: Save ${savings:.2} with {member_count} members ({:.0}% discount)!\n",
            rate * 100.0
        )?;
        Ok(Ok(()))
    }

    fn select_premium_tier(&mut self) -> io::Result<Prompt<PremiumTier>> {
        writeln!(self.output, "\nPremium Feature Levels:")?;
        writeln!(self.output, "{}", "-".repeat(RULE_WIDTH))?;
        for (i, tier) in PremiumTier::ALL.iter().enumerate() {
            let rate = self.engine.rules().surcharge_rate(*tier);
            if rate > 0.0 {
                writeln!(self.output, "{}. {} (+{:.0}% surcharge)", i + 1, tier, rate * 100.0)?;
            } else {
                writeln!(self.output, "{}. {}", i + 1, tier)?;
            }
        }
        writeln!(self.output)?;

        let count = PremiumTier::ALL.len();
        loop {
            let Some(input) = self.read_input(&format!(
                "Select premium level (1-{count}) or 'none' for no premium: "
            ))?
            else {
                return Ok(Prompt::Cancel);
            };

            if input.eq_ignore_ascii_case("cancel") {
                return Ok(Prompt::Cancel);
            }

            let tier = match input.parse::<usize>() {
                Ok(0) => Some(PremiumTier::None),
                Ok(n) => PremiumTier::ALL.get(n - 1).copied(),
                Err(_) => input.parse::<PremiumTier>().ok(),
            };

            match tier {
                Some(tier) => return Ok(Prompt::Value(tier)),
                None => writeln!(
                    self.output,
                    "Invalid selection. Please enter a number between 1 and {count}, or 'none'.\n"
                )?,
            }
        }
    }

    fn confirm(&mut self, summary: &str) -> io::Result<Prompt<bool>> {
        writeln!(self.output, "{summary}")?;

        loop {
            let Some(input) = self.read_input("Do you want to confirm this membership? (yes/no): ")? else {
                return Ok(Prompt::Cancel);
            };

            match input.to_ascii_lowercase().as_str() {
                "yes" | "y" => return Ok(Prompt::Value(true)),
                "no" | "n" => return Ok(Prompt::Value(false)),
                "cancel" => return Ok(Prompt::Cancel),
                _ => writeln!(self.output, "Please enter 'yes' or 'no'.\n")?,
            }
        }
    }

    /// Print `prompt` and read one trimmed line; `None` at end of input.
    fn read_input(&mut self, prompt: &str) -> io::Result<Option<String>> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            writeln!(self.output)?;
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }
}

/// Resolve a 1-based index or a case-insensitive name against `names`.
fn pick<'a>(names: &'a [String], input: &str) -> Option<&'a str> {
    if is_number(input) {
        let index: usize = input.parse().ok()?;
        return names.get(index.checked_sub(1)?).map(String::as_str);
    }

    names
        .iter()
        .find(|n| n.eq_ignore_ascii_case(input))
        .map(String::as_str)
}

fn is_number(input: &str) -> bool {
    !input.is_empty() && input.chars().all(|c| c.is_ascii_digit())
}
