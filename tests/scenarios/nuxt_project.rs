//! A Nuxt-style project: images under `public/images`, served from `/images`.

use crate::common::*;
use crate::{assert_exists, assert_missing};

fn nuxt_env() -> TestEnv {
    let env = TestEnv::new();
    env.write_png("public/images/logo.png");
    env.write_png("public/images/icons/cart.png");
    env.write_png("public/images/icons/user.png");
    env.write_file(
        "components/Header.vue",
        r#"<template>
  <header>
    <img src="/images/logo.png" />
    <img :src="'/images/icons/cart.png'" />
  </header>
</template>
"#,
    );
    env.write_file(
        "assets/css/main.scss",
        ".avatar { background-image: url('/images/icons/user.png'); }\n",
    );
    env.write_file(".nuxt/components.js", "'/images/logo.png'");
    env.write_file(".output/public/index.html", "<img src=\"/images/logo.png\">");
    env
}

#[test]
fn migrates_whole_public_tree() {
    let env = nuxt_env();

    let result = env.run(&["./public/images"]);

    assert!(result.is_success(), "{}", result.combined_output());
    for name in ["logo", "icons/cart", "icons/user"] {
        assert_missing!(env, &format!("public/images/{name}.png"));
        assert_exists!(env, &format!("public/images/{name}.webp"));
    }

    let header = env.read_file("components/Header.vue");
    assert!(header.contains(r#"<img src="/images/logo.webp" />"#));
    assert!(header.contains(r#"<img :src="'/images/icons/cart.webp'" />"#));
    assert_eq!(
        env.read_file("assets/css/main.scss"),
        ".avatar { background-image: url('/images/icons/user.webp'); }\n"
    );
}

#[test]
fn build_output_is_never_touched() {
    let env = nuxt_env();

    let result = env.run(&["./public/images"]);

    assert!(result.is_success(), "{}", result.combined_output());
    assert_eq!(env.read_file(".nuxt/components.js"), "'/images/logo.png'");
    assert_eq!(
        env.read_file(".output/public/index.html"),
        "<img src=\"/images/logo.png\">"
    );
}

#[test]
fn preview_then_apply() {
    let env = nuxt_env();

    let preview = env.run(&["./public/images", "--dry-run", "--json"]);
    assert!(preview.is_success(), "{}", preview.combined_output());
    let planned = preview.json();
    assert_eq!(planned["dry_run"], true);
    assert_eq!(planned["converted"].as_array().unwrap().len(), 3);
    assert_eq!(planned["rewrites"].as_array().unwrap().len(), 2);
    assert_exists!(env, "public/images/logo.png");

    let applied = env.run(&["./public/images", "--json"]);
    assert!(applied.is_success(), "{}", applied.combined_output());
    let report = applied.json();
    assert_eq!(report["rewrites"].as_array().unwrap().len(), 2);
    assert!(report["size_after"].as_u64().unwrap() > 0);
    assert_missing!(env, "public/images/logo.png");
}
