//! A plain static site: images referenced relative to the pages.

use crate::common::*;
use crate::{assert_exists, assert_missing};

#[test]
fn relative_references_in_nested_pages() {
    let env = TestEnv::new();
    env.write_png("assets/img/hero.png");
    env.write_png("assets/img/team/ada.png");
    env.write_file("styles/site.css", HERO_CSS);
    env.write_file(
        "index.html",
        "<img src=\"assets/img/team/ada.png\">\n<img src=\"./assets/img/hero.png\">\n",
    );
    env.write_file("about/index.html", "<img src=\"../assets/img/team/ada.png\">\n");

    let result = env.run(&["assets/img"]);

    assert!(result.is_success(), "{}", result.combined_output());
    assert_exists!(env, "assets/img/team/ada.webp");
    assert_missing!(env, "assets/img/team/ada.png");
    assert_eq!(
        env.read_file("styles/site.css"),
        ".hero {\n  background: url(../assets/img/hero.webp);\n}\n"
    );
    assert_eq!(
        env.read_file("index.html"),
        "<img src=\"assets/img/team/ada.webp\">\n<img src=\"./assets/img/hero.webp\">\n"
    );
    assert_eq!(
        env.read_file("about/index.html"),
        "<img src=\"../assets/img/team/ada.webp\">\n"
    );
}

#[test]
fn unrelated_images_with_same_stem_are_not_confused() {
    let env = TestEnv::new();
    env.write_png("assets/img/logo.png");
    env.write_file("index.html", "<img src=\"assets/img/logo.png\"><img src=\"vendor/logo.svg\">\n");

    let result = env.run(&["assets/img"]);

    assert!(result.is_success(), "{}", result.combined_output());
    assert_eq!(
        env.read_file("index.html"),
        "<img src=\"assets/img/logo.webp\"><img src=\"vendor/logo.svg\">\n"
    );
}
