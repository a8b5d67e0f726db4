pub fn setup_tracing(json: bool) {
    let builder = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        // disable printing the name of the module in every log line.
        .with_target(false);
    if json {
        // plain lines without color codes so log collectors can parse them.
        builder.with_ansi(false).json().init();
    } else {
        builder.init();
    }
}
