pub mod form_file;

#[cfg(feature = "cli")]
pub use cli::CliConfig;

#[cfg(feature = "cli")]
pub mod cli {
    use crate::domain::model::FieldSet;
    use crate::utils::error::Result;
    use clap::Parser;
    use serde::{Deserialize, Serialize};

    #[derive(Debug, Clone, Serialize, Deserialize, Parser)]
    #[command(name = "form-validator")]
    #[command(about = "Validate bank details and confirm submission")]
    pub struct CliConfig {
        /// Account holder name
        #[arg(long)]
        pub name: Option<String>,

        /// 10-digit phone number
        #[arg(long)]
        pub phone: Option<String>,

        #[arg(long)]
        pub email: Option<String>,

        /// Bank branch IFSC code, e.g. ABCD1234567
        #[arg(long)]
        pub ifsc: Option<String>,

        /// TOML or JSON file with the form fields; flags override its values
        #[arg(short, long)]
        pub input: Option<String>,

        /// Submit without asking for confirmation
        #[arg(short, long)]
        pub yes: bool,

        #[arg(short, long, help = "Enable verbose output")]
        pub verbose: bool,
    }

    impl CliConfig {
        /// Loads `--input` if given, then applies the individual field flags.
        pub fn field_set(&self) -> Result<FieldSet> {
            let mut fields = match &self.input {
                Some(path) => {
                    tracing::debug!("Loading form fields from {}", path);
                    FieldSet::from_file(path)?
                }
                None => FieldSet::default(),
            };

            if let Some(name) = &self.name {
                fields.name = name.clone();
            }
            if let Some(phone) = &self.phone {
                fields.phone = phone.clone();
            }
            if let Some(email) = &self.email {
                fields.email = email.clone();
            }
            if let Some(ifsc) = &self.ifsc {
                fields.routing_code = ifsc.clone();
            }

            Ok(fields)
        }
    }

}
