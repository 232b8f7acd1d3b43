fn main() {
    // Brand constants are fixed at build time; runtime has no way to change them.
    const BRAND_VARS: [(&str, &str); 3] = [
        ("APP_BRAND", "The Key Financial"),
        ("PRIMARY_COLOR", "#043d44"),
        ("ACCENT_COLOR", "#f3b600"),
    ];

    for (name, default) in BRAND_VARS {
        println!("cargo:rerun-if-env-changed={name}");
        let value = std::env::var(name).unwrap_or_else(|_| default.to_string());
        println!("cargo:rustc-env=WIZARD_{name}={value}");
    }
}
