use crate::answers::Features;

/// How a planned file gets produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Copied from the template verbatim
    Copy,
    /// Rendered with the project variables
    Render,
    /// Rendered, then merged with the manifest already on disk
    Manifest,
    /// Produced by the license generator
    License,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlannedFile {
    pub template: &'static str,
    pub destination: &'static str,
    pub action: Action,
}

const fn copy(template: &'static str, destination: &'static str) -> PlannedFile {
    PlannedFile {
        template,
        destination,
        action: Action::Copy,
    }
}

const fn render(template: &'static str, destination: &'static str) -> PlannedFile {
    PlannedFile {
        template,
        destination,
        action: Action::Render,
    }
}

const PROJECT_FILES: &[PlannedFile] = &[
    copy("browser-sync-config.js", "browser-sync-config.js"),
    copy("typings.json", "typings.json"),
    copy("tslint.json", "tslint.json"),
    copy("tsconfig.json", "tsconfig.json"),
    copy("systemjs.config.js", "systemjs.config.js"),
    render("README.md.tera", "README.md"),
    render("index.html.tera", "index.html"),
    copy("gitignore", ".gitignore"),
    copy("editorconfig", ".editorconfig"),
    PlannedFile {
        template: "package.json.tera",
        destination: "package.json",
        action: Action::Manifest,
    },
    PlannedFile {
        template: "LICENSE.tera",
        destination: "LICENSE",
        action: Action::License,
    },
];

const APP_FILES: &[PlannedFile] = &[
    render("app/main.ts.tera", "app/main.ts"),
    render("app/app.component.ts.tera", "app/app.component.ts"),
    render("app/app.component.html.tera", "app/app.component.html"),
    render("app/app.routes.ts.tera", "app/app.routes.ts"),
    render("app/components/index.ts.tera", "app/components/index.ts"),
    copy(
        "app/components/login/login-demo.component.ts",
        "app/components/login/login-demo.component.ts",
    ),
    copy(
        "app/components/login/login-demo.component.html",
        "app/components/login/login-demo.component.html",
    ),
    copy(
        "app/components/router/AuthRouterOutlet.ts",
        "app/components/router/AuthRouterOutlet.ts",
    ),
    copy(
        "assets/material.orange-blue.min.css",
        "assets/material.orange-blue.min.css",
    ),
    copy("app/css/muli-font.css", "app/css/muli-font.css"),
    copy("app/css/app.css", "app/css/app.css"),
    copy("i18n/en.json", "i18n/en.json"),
    copy("i18n/it.json", "i18n/it.json"),
];

const SEARCH_FILES: &[PlannedFile] = &[
    copy(
        "app/components/search/search.component.html",
        "app/components/search/search.component.html",
    ),
    copy(
        "app/components/search/search.component.ts",
        "app/components/search/search.component.ts",
    ),
    copy(
        "app/components/search/search-bar.component.html",
        "app/components/search/search-bar.component.html",
    ),
    copy(
        "app/components/search/search-bar.component.ts",
        "app/components/search/search-bar.component.ts",
    ),
];

const CONTENT_FILES: &[PlannedFile] = &[
    copy(
        "app/components/files/files.component.html",
        "app/components/files/files.component.html",
    ),
    copy(
        "app/components/files/files.component.ts",
        "app/components/files/files.component.ts",
    ),
];

const TASK_FILES: &[PlannedFile] = &[
    copy(
        "app/components/tasks/activiti-demo.component.html",
        "app/components/tasks/activiti-demo.component.html",
    ),
    copy(
        "app/components/tasks/activiti-demo.component.css",
        "app/components/tasks/activiti-demo.component.css",
    ),
    copy(
        "app/components/tasks/activiti-demo.component.ts",
        "app/components/tasks/activiti-demo.component.ts",
    ),
];

/// Files produced for the given features, in write order.
///
/// Navigation and drawer bars live in the root component markup only, so
/// they add no files of their own.
pub fn plan(features: &Features) -> Vec<PlannedFile> {
    let mut files: Vec<PlannedFile> = PROJECT_FILES.iter().chain(APP_FILES).copied().collect();

    if features.search_bar {
        files.extend_from_slice(SEARCH_FILES);
    }
    if features.content_page {
        files.extend_from_slice(CONTENT_FILES);
    }
    if features.bpm_task_page {
        files.extend_from_slice(TASK_FILES);
    }

    files
}
