use orghooks_lib::CreatedWebhook;

pub fn read_secret<P>(prompt: P) -> std::io::Result<String>
where
    P: AsRef<str>
{
    rpassword::prompt_password(prompt.as_ref())
}

/// an empty answer to the prompt keeps the placeholder
pub fn review_secret(hook: &mut CreatedWebhook, prompt: bool) -> std::io::Result<()> {
    review_secret_with(hook, prompt, read_secret::<String>)
}

pub fn review_secret_with<F>(hook: &mut CreatedWebhook, prompt: bool, mut read: F) -> std::io::Result<()>
where
    F: FnMut(String) -> std::io::Result<String>
{
    if !hook.config.has_redacted_secret() {
        return Ok(());
    }

    if !prompt {
        tracing::warn!(
            "hook {} for {} has a redacted secret, the placeholder will be used as its secret",
            hook.name,
            hook.config.url
        );

        return Ok(());
    }

    let given = read(format!("secret for {}: ", hook.config.url))?;

    if given.is_empty() {
        tracing::warn!("no secret given for {}, keeping the placeholder", hook.config.url);
    } else {
        hook.config.secret = given;
    }

    Ok(())
}
