//! Config command: resolve and print the bundler configuration fragment.

use crate::cli::ConfigArgs;
use crate::error::Result;
use laravel_rolldown::laravel;

pub fn execute(args: ConfigArgs) -> Result<()> {
    let plugin = laravel(args.entry).with_cwd(&args.cwd);
    let fragment = plugin.config_fragment(args.command.into(), &args.mode);

    println!("{}", serde_json::to_string_pretty(&fragment)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use crate::cli::CommandKind;
    use laravel_rolldown::BuildCommand;

    #[test]
    fn test_command_kind_conversion() {
        assert_eq!(BuildCommand::from(CommandKind::Build), BuildCommand::Build);
        assert_eq!(BuildCommand::from(CommandKind::Serve), BuildCommand::Serve);
    }
}
