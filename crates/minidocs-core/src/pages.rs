//! Page content registry.

use std::collections::HashMap;

use crate::error::{Error, Result};

const INTRODUCTION: &str = "# Introduction

Mini is a small component framework built around signals, decorators and
dependency injection.

## Why Mini

- Class components with a `render()` method
- Fine-grained reactivity through signals
- A router with guards, resolvers and lazy routes

## A first component

```tsx
import { Component, signal } from \"@mini/core\";

export class Counter extends Component {
  count = signal(0);

  render() {
    return <button onClick={() => this.count.set(this.count.value + 1)}>{this.count}</button>;
  }
}
```
";

const QUICK_START: &str = "# Quick Start

Create a project and start the dev server:

```bash
npm create mini@latest my-app
cd my-app
npm run dev
```
";

/// Markdown bodies keyed by route path.
#[derive(Debug, Clone, Default)]
pub struct PageRegistry {
    pages: HashMap<String, String>,
}

impl PageRegistry {
    /// An empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// The pages bundled with the site.
    pub fn docs() -> Self {
        let mut registry = Self::new();
        registry.insert("/", INTRODUCTION);
        registry.insert("/getting-started/quick-start", QUICK_START);
        registry
    }

    /// Register (or replace) the page at `path`.
    pub fn insert(&mut self, path: impl Into<String>, markdown: impl Into<String>) {
        self.pages.insert(path.into(), markdown.into());
    }

    /// The markdown body for `path`. Paths are matched exactly.
    pub fn lookup(&self, path: &str) -> Result<&str> {
        self.pages
            .get(path)
            .map(String::as_str)
            .ok_or_else(|| Error::PageNotFound(path.to_string()))
    }

    /// Number of registered pages.
    pub fn len(&self) -> usize {
        self.pages.len()
    }

    /// Whether no pages are registered.
    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }
}
