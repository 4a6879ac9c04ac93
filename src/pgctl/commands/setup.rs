use super::{CmdMessage, CmdResult, Context};
use crate::error::Result;
use crate::{config, generate};
use std::fs;

/// Initialize the instance: persist the effective config and regenerate
/// the compose descriptor and init scripts from it. Idempotent; rerunning
/// with an unchanged config rewrites byte-identical files.
pub fn run(ctx: &Context) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    let cfg = ctx.config(&mut result);

    config::save(&ctx.instance, cfg)?;
    result.add_message(CmdMessage::success(format!(
        "Configuration saved to {}",
        ctx.instance.config_file().display()
    )));

    fs::write(ctx.instance.compose_file(), generate::render_compose(cfg))?;
    result.add_message(CmdMessage::success(format!(
        "Generated {}",
        generate::COMPOSE_FILE
    )));

    let scripts_dir = ctx.instance.init_scripts_dir();
    fs::create_dir_all(&scripts_dir)?;

    fs::write(
        scripts_dir.join(generate::EXTENSIONS_SCRIPT),
        generate::render_extensions_script(&cfg.extensions),
    )?;
    result.add_message(CmdMessage::success(format!(
        "Generated extension script for: {}",
        cfg.extensions.join(", ")
    )));

    if let Some(types_sql) = generate::render_custom_types_script(&cfg.custom_types) {
        fs::write(scripts_dir.join(generate::CUSTOM_TYPES_SCRIPT), types_sql)?;
        result.add_message(CmdMessage::success(format!(
            "Generated {} custom type(s)",
            cfg.custom_types.len()
        )));
    }

    fs::write(
        scripts_dir.join(generate::SAMPLE_DATA_SCRIPT),
        generate::render_sample_script(),
    )?;
    result.add_message(CmdMessage::success("Generated sample data template"));

    result.add_message(CmdMessage::info(
        "Setup complete. Review the config file to customize, then run: pgctl start",
    ));
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::instance::Instance;
    use crate::model::PostgresConfig;

    #[test]
    fn test_setup_writes_all_artifacts() {
        let temp = tempfile::tempdir().unwrap();
        let instance = Instance::resolve(Some("default"), temp.path());
        let ctx = Context::new(instance.clone());

        let result = run(&ctx).unwrap();
        assert!(!result.has_errors());

        assert!(instance.config_file().exists());
        assert!(instance.compose_file().exists());
        let scripts = instance.init_scripts_dir();
        assert!(scripts.join("01-extensions.sql").exists());
        assert!(scripts.join("03-sample-data.sql").exists());
        // No custom types configured, so no file is produced
        assert!(!scripts.join("02-custom-types.sql").exists());
    }

    #[test]
    fn test_setup_twice_is_byte_identical() {
        let temp = tempfile::tempdir().unwrap();
        let instance = Instance::resolve(Some("default"), temp.path());

        run(&Context::new(instance.clone())).unwrap();
        let compose_first = fs::read(instance.compose_file()).unwrap();
        let extensions_first =
            fs::read(instance.init_scripts_dir().join("01-extensions.sql")).unwrap();

        run(&Context::new(instance.clone())).unwrap();
        let compose_second = fs::read(instance.compose_file()).unwrap();
        let extensions_second =
            fs::read(instance.init_scripts_dir().join("01-extensions.sql")).unwrap();

        assert_eq!(compose_first, compose_second);
        assert_eq!(extensions_first, extensions_second);
    }

    #[test]
    fn test_setup_emits_custom_types_when_configured() {
        let temp = tempfile::tempdir().unwrap();
        let instance = Instance::resolve(Some("default"), temp.path());
        let cfg = PostgresConfig {
            custom_types: vec!["CREATE TYPE mood AS ENUM ('sad');".to_string()],
            ..PostgresConfig::defaults_for(&instance)
        };
        config::save(&instance, &cfg).unwrap();

        run(&Context::new(instance.clone())).unwrap();

        let types = fs::read_to_string(
            instance.init_scripts_dir().join("02-custom-types.sql"),
        )
        .unwrap();
        assert!(types.contains("CREATE TYPE mood AS ENUM ('sad');"));
    }

    #[test]
    fn test_setup_respects_configured_port() {
        let temp = tempfile::tempdir().unwrap();
        let instance = Instance::resolve(Some("foo"), temp.path());
        let cfg = PostgresConfig {
            port: 6001,
            ..PostgresConfig::defaults_for(&instance)
        };
        config::save(&instance, &cfg).unwrap();

        run(&Context::new(instance.clone())).unwrap();

        let compose = fs::read_to_string(instance.compose_file()).unwrap();
        assert!(compose.contains(r#"- "6001:5432""#));
        assert!(compose.contains("container_name: dev-postgres-foo"));
    }
}
