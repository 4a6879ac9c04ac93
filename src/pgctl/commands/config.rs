use super::{CmdResult, Context};
use crate::error::Result;
use crate::model::PostgresConfig;

/// Dump a pristine default configuration, for seeding a new instance.
pub fn gen() -> Result<CmdResult> {
    let config = PostgresConfig::default();
    Ok(CmdResult::default().with_output(serde_json::to_string_pretty(&config)?))
}

/// Dump the effective configuration for the selected instance.
pub fn display(ctx: &Context) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    let config = ctx.config(&mut result);
    result.output = Some(serde_json::to_string_pretty(config)?);
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::instance::Instance;

    #[test]
    fn test_gen_emits_parseable_defaults() {
        let result = gen().unwrap();
        let parsed: PostgresConfig = serde_json::from_str(&result.output.unwrap()).unwrap();
        assert_eq!(parsed, PostgresConfig::default());
    }

    #[test]
    fn test_display_reflects_instance_derivation() {
        let temp = tempfile::tempdir().unwrap();
        let ctx = Context::new(Instance::resolve(Some("foo"), temp.path()));
        let result = display(&ctx).unwrap();
        assert!(result.output.unwrap().contains("dev-postgres-foo"));
    }
}
