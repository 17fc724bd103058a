use regex::Regex;
use std::collections::HashMap;

use crate::core::{RDFTriple, StarQuery, Term, Variable};
use crate::error::{Result, StoreError};

const RDF_TYPE: &str = "<http://www.w3.org/1999/02/22-rdf-syntax-ns#type>";

/// Parser for query sets made of basic `SELECT ... WHERE { ... }` queries.
///
/// Only triple patterns separated by `.` are understood; `PREFIX`
/// declarations are expanded, and the `a` keyword stands for `rdf:type`.
/// Queries are labelled `q1`, `q2`, ... in file order.
pub struct StarQueryParser {
    prefix_regex: Regex,
    select_regex: Regex,
    token_regex: Regex,
}

impl StarQueryParser {
    pub fn new() -> Result<Self> {
        Ok(StarQueryParser {
            prefix_regex: Regex::new(r"(?i)PREFIX\s+([A-Za-z][\w-]*)?:\s*<([^>]*)>")?,
            select_regex: Regex::new(r"(?is)SELECT\s+(.*?)\s*WHERE\s*\{(.*?)\}")?,
            token_regex: Regex::new(
                r#"\?\w+|<[^>]*>|"(?:[^"\\]|\\.)*"(?:@[A-Za-z0-9-]+|\^\^(?:<[^>]*>|[A-Za-z][\w-]*:\w*))?|_:\w+|[A-Za-z][\w-]*:[\w-]*|:[\w-]+|\ba\b|\."#,
            )?,
        })
    }

    pub fn parse(&self, input: &str) -> Result<Vec<StarQuery>> {
        let prefixes: HashMap<String, String> = self
            .prefix_regex
            .captures_iter(input)
            .map(|c| {
                let prefix = c.get(1).map_or("", |m| m.as_str()).to_string();
                (prefix, c[2].to_string())
            })
            .collect();

        let mut queries = Vec::new();
        for (i, captures) in self.select_regex.captures_iter(input).enumerate() {
            let label = format!("q{}", i + 1);
            let patterns = self.parse_patterns(&captures[2], &prefixes, &label)?;
            let answer_variables = Self::parse_projection(&captures[1], &patterns, &label)?;
            queries.push(StarQuery::new(&label, patterns, answer_variables));
        }
        Ok(queries)
    }

    fn parse_patterns(&self, body: &str, prefixes: &HashMap<String, String>, label: &str) -> Result<Vec<RDFTriple>> {
        let mut patterns = Vec::new();
        let mut terms = Vec::with_capacity(3);
        let mut last_end = 0;

        for token in self.token_regex.find_iter(body) {
            let gap = &body[last_end..token.start()];
            if !gap.trim().is_empty() {
                return Err(StoreError::Parse(format!("{}: unexpected text '{}'", label, gap.trim())));
            }
            last_end = token.end();

            if token.as_str() == "." {
                if !terms.is_empty() {
                    patterns.push(Self::close_pattern(&mut terms, label)?);
                }
            } else {
                terms.push(Self::parse_term(token.as_str(), prefixes, label)?);
            }
        }

        let rest = body[last_end..].trim();
        if !rest.is_empty() {
            return Err(StoreError::Parse(format!("{}: unexpected text '{}'", label, rest)));
        }
        if !terms.is_empty() {
            patterns.push(Self::close_pattern(&mut terms, label)?);
        }
        if patterns.is_empty() {
            return Err(StoreError::Parse(format!("{}: query has no triple pattern", label)));
        }
        Ok(patterns)
    }

    fn close_pattern(terms: &mut Vec<Term>, label: &str) -> Result<RDFTriple> {
        RDFTriple::try_from(std::mem::take(terms))
            .map_err(|e| StoreError::Parse(format!("{}: {}", label, e)))
    }

    fn parse_term(token: &str, prefixes: &HashMap<String, String>, label: &str) -> Result<Term> {
        if token.starts_with('?') {
            return Ok(Term::variable(token));
        }
        if token == "a" {
            return Ok(Term::constant(RDF_TYPE));
        }
        if token.starts_with('<') || token.starts_with("_:") {
            return Ok(Term::constant(token));
        }
        if token.starts_with('"') {
            return match token.rsplit_once("^^") {
                Some((lexical, datatype)) if !datatype.starts_with('<') => {
                    let datatype = Self::expand(datatype, prefixes, label)?;
                    Ok(Term::Constant(format!("{}^^{}", lexical, datatype)))
                }
                _ => Ok(Term::constant(token)),
            };
        }
        Ok(Term::Constant(Self::expand(token, prefixes, label)?))
    }

    fn expand(prefixed: &str, prefixes: &HashMap<String, String>, label: &str) -> Result<String> {
        let (prefix, local) = prefixed
            .split_once(':')
            .ok_or_else(|| StoreError::Parse(format!("{}: malformed term '{}'", label, prefixed)))?;
        let namespace = prefixes
            .get(prefix)
            .ok_or_else(|| StoreError::Parse(format!("{}: undeclared prefix '{}:'", label, prefix)))?;
        Ok(format!("<{}{}>", namespace, local))
    }

    fn parse_projection(select: &str, patterns: &[RDFTriple], label: &str) -> Result<Vec<Variable>> {
        let mut variables = Vec::new();
        for token in select.split_whitespace() {
            match token {
                "*" => {
                    for pattern in patterns {
                        for var in pattern.terms().into_iter().filter_map(Term::as_variable) {
                            if !variables.contains(var) {
                                variables.push(var.clone());
                            }
                        }
                    }
                }
                t if t.eq_ignore_ascii_case("DISTINCT") => {}
                t if t.starts_with('?') => variables.push(Variable::new(t)),
                t => {
                    return Err(StoreError::Parse(format!("{}: unsupported projection '{}'", label, t)));
                }
            }
        }
        Ok(variables)
    }
}
