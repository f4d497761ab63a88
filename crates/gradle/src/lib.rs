//! # depdrift-gradle
//!
//! Gradle Groovy build file support for depdrift.
//!
//! Extracts dependency declarations written as map-style
//! `group:'g',name:'a',version:'v'` clauses from build.gradle files. Only the
//! literal single-quoted clause form is recognized; shorthand
//! `implementation 'g:a:v'` strings and the Kotlin DSL are out of scope.

pub mod extractor;

pub use extractor::{GradleExtractor, parse_declarations};
