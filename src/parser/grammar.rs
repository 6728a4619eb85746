//! Install verb grammar.
//!
//! Each supported package manager lists the verbs that add packages. A
//! command is an install command only when its first token is a listed
//! manager, its second token is one of that manager's verbs, and at least
//! one argument follows.

use std::fmt;

/// Package managers whose install commands are inspected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PackageManager {
    Npm,
    Bun,
    Yarn,
    Pnpm,
}

impl PackageManager {
    /// The executable name as typed on the command line.
    pub fn program(&self) -> &'static str {
        match self {
            PackageManager::Npm => "npm",
            PackageManager::Bun => "bun",
            PackageManager::Yarn => "yarn",
            PackageManager::Pnpm => "pnpm",
        }
    }
}

impl fmt::Display for PackageManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.program())
    }
}

/// One row of the install grammar.
#[derive(Debug)]
pub struct ManagerGrammar {
    /// Manager this row describes.
    pub manager: PackageManager,
    /// Verbs that install packages for this manager.
    pub verbs: &'static [&'static str],
}

const INSTALL_VERBS: &[&str] = &["install", "add", "i"];

/// All recognized managers and their install verbs.
pub static INSTALL_GRAMMAR: &[ManagerGrammar] = &[
    ManagerGrammar {
        manager: PackageManager::Npm,
        verbs: INSTALL_VERBS,
    },
    ManagerGrammar {
        manager: PackageManager::Bun,
        verbs: INSTALL_VERBS,
    },
    ManagerGrammar {
        manager: PackageManager::Yarn,
        verbs: INSTALL_VERBS,
    },
    ManagerGrammar {
        manager: PackageManager::Pnpm,
        verbs: INSTALL_VERBS,
    },
];

/// A command recognized as a package install.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstallCommand<'a> {
    /// Manager invoked.
    pub manager: PackageManager,
    /// Install verb used (`install`, `add`, `i`).
    pub verb: &'a str,
    /// Remaining whitespace-separated tokens, flags included.
    pub args: Vec<&'a str>,
}

/// Match a command against the install grammar.
///
/// Returns `None` for anything that is not `<manager> <verb> <args...>` at
/// the start of the command.
pub fn match_install(command: &str) -> Option<InstallCommand<'_>> {
    let mut tokens = command.split_whitespace();
    let program = tokens.next()?;
    let verb = tokens.next()?;

    let row = INSTALL_GRAMMAR
        .iter()
        .find(|row| row.manager.program() == program)?;
    if !row.verbs.contains(&verb) {
        return None;
    }

    let args: Vec<&str> = tokens.collect();
    if args.is_empty() {
        return None;
    }

    Some(InstallCommand {
        manager: row.manager,
        verb,
        args,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_manager_accepts_every_verb() {
        for row in INSTALL_GRAMMAR {
            for verb in row.verbs {
                let command = format!("{} {} left-pad", row.manager, verb);
                let matched = match_install(&command)
                    .unwrap_or_else(|| panic!("expected match for {command}"));
                assert_eq!(matched.manager, row.manager);
                assert_eq!(matched.verb, *verb);
                assert_eq!(matched.args, ["left-pad"]);
            }
        }
    }

    #[test]
    fn grammar_covers_four_managers() {
        let programs: Vec<_> = INSTALL_GRAMMAR.iter().map(|r| r.manager.program()).collect();
        assert_eq!(programs, ["npm", "bun", "yarn", "pnpm"]);
    }

    #[test]
    fn unknown_manager_does_not_match() {
        assert!(match_install("cargo add serde").is_none());
        assert!(match_install("pip install requests").is_none());
    }

    #[test]
    fn unknown_verb_does_not_match() {
        assert!(match_install("npm run build").is_none());
        assert!(match_install("yarn remove lodash").is_none());
        assert!(match_install("npm ci").is_none());
    }

    #[test]
    fn verb_without_arguments_does_not_match() {
        assert!(match_install("npm install").is_none());
        assert!(match_install("pnpm add   ").is_none());
    }

    #[test]
    fn manager_must_start_the_command() {
        assert!(match_install("git commit -m 'add npm install note'").is_none());
        assert!(match_install("echo npm install left-pad").is_none());
    }

    #[test]
    fn leading_whitespace_is_ignored() {
        let matched = match_install("   npm i react").unwrap();
        assert_eq!(matched.manager, PackageManager::Npm);
        assert_eq!(matched.args, ["react"]);
    }

    #[test]
    fn prefix_of_manager_name_does_not_match() {
        assert!(match_install("npmx install left-pad").is_none());
        assert!(match_install("npm installer left-pad").is_none());
    }

    #[test]
    fn tabs_separate_tokens() {
        let matched = match_install("yarn\tadd\tleft-pad").unwrap();
        assert_eq!(matched.manager, PackageManager::Yarn);
        assert_eq!(matched.args, ["left-pad"]);
    }
}
