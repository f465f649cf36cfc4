//! Command-line arguments.

use clap::{Args, Parser, ValueEnum};
use nodegen::{DartTarget, GeneratorConfig, Strategy};
use nodegen::schema::DEFAULT_BASE_MARKER;
use std::path::PathBuf;

/// generate Dart AST node classes and their construction dispatcher from a node-kind schema
#[derive(Parser, Debug)]
#[command(name = "nodegen", version)]
pub struct CommandLineInterface {
    /// node-kind schema; the first line is a header and is skipped
    #[arg(long)]
    pub schema: PathBuf,

    /// base node class source, read for field types (typed strategy only)
    #[arg(long)]
    pub base: Option<PathBuf>,

    /// output .dart file (stdout if omitted)
    #[arg(short, long)]
    pub out: Option<PathBuf>,

    /// how generated fields are declared
    #[arg(long, value_enum, default_value_t = StrategyArg::Typed)]
    pub strategy: StrategyArg,

    /// line that opens the base class in the base source
    #[arg(long, default_value = DEFAULT_BASE_MARKER)]
    pub marker: String,

    #[command(flatten)]
    pub names: TargetNames,

    /// log debug output (RUST_LOG takes precedence)
    #[arg(short, long, default_value_t = false)]
    pub verbose: bool,
}

/// Names used in the generated file.
#[derive(Args, Debug, Clone)]
pub struct TargetNames {
    /// class every generated node extends
    #[arg(long, default_value = "ASTNode")]
    pub base_class: String,

    /// interface returned by the dispatcher
    #[arg(long, default_value = "AST")]
    pub interface: String,

    /// enum holding the type tags
    #[arg(long, default_value = "ASTType")]
    pub enum_name: String,

    /// dispatcher function name
    #[arg(long, default_value = "initAST")]
    pub dispatcher: String,

    /// import line replacing the default preamble; repeatable
    #[arg(long = "import")]
    pub imports: Vec<String>,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum StrategyArg {
    /// field types copied from the base class accessors
    Typed,
    /// every field declared `var`
    Untyped,
}

impl From<StrategyArg> for Strategy {
    fn from(arg: StrategyArg) -> Self {
        match arg {
            StrategyArg::Typed => Strategy::Typed,
            StrategyArg::Untyped => Strategy::Untyped,
        }
    }
}

impl TargetNames {
    fn into_target(self) -> DartTarget {
        DartTarget {
            base_class: self.base_class,
            interface: self.interface,
            enum_name: self.enum_name,
            dispatcher: self.dispatcher,
            imports: (!self.imports.is_empty()).then_some(self.imports),
            ..DartTarget::default()
        }
    }
}

impl CommandLineInterface {
    /// Maps the arguments onto a generation run.
    pub fn to_config(&self) -> GeneratorConfig {
        let mut config = GeneratorConfig::new(&self.schema)
            .strategy(self.strategy.into())
            .marker(&self.marker)
            .target(self.names.clone().into_target());

        if let Some(base) = &self.base {
            config = config.base(base);
        }
        if let Some(out) = &self.out {
            config = config.output(out);
        }

        config
    }
}
