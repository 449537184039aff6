//! Module level: modules, imports, groups, value and behaviour declarations
//! and `with` attributes.

use crate::diagnostics::DiagnosticKind;
use crate::kind::Kind::*;
use crate::kind::token_sets::{DEF_KINDS, MODULE_DEF_START, STMT_START, WITH_KEYWORDS};
use crate::parser::Parser;

impl Parser<'_> {
    /// `module Name [language ".."] { defs } [with { .. }]`
    pub(super) fn parse_module(&mut self) {
        self.start_node(Module);
        self.assert_current(KwModule);
        self.bump();
        self.parse_name();
        if self.currently_is(KwLanguage) {
            self.parse_language_spec();
        }
        self.parse_braced_items(Self::parse_module_item);
        self.parse_with_opt();
        self.finish_node();
    }

    fn parse_module_item(&mut self) {
        if self.currently_is_one_of(MODULE_DEF_START) {
            self.parse_module_def();
        } else {
            self.recover_to_stmt(DiagnosticKind::ExpectedModuleDefinition);
        }
    }

    fn parse_language_spec(&mut self) {
        self.start_node(LanguageSpec);
        self.bump();
        self.parse_comma_list(|p| {
            p.expect(String, "string");
        });
        self.finish_node();
    }

    /// A definition with optional visibility.
    pub(super) fn parse_module_def(&mut self) {
        self.start_node(ModuleDef);
        match self.current() {
            KwPrivate | KwPublic => self.bump(),
            KwFriend if self.peek_nth(1) != KwModule => self.bump(),
            _ => {}
        }

        match self.current() {
            KwImport => self.parse_import(),
            KwGroup => self.parse_group(),
            KwFriend => self.parse_friend(),
            KwType => self.parse_type_decl(),
            KwTemplate => self.parse_template_decl(),
            KwModulepar => self.parse_module_par(),
            KwVar | KwConst => self.parse_value_decl(),
            KwSignature => self.parse_signature_decl(),
            KwFunction | KwTestcase | KwAltstep => self.parse_func_decl(),
            KwControl => self.parse_control_part(),
            KwExternal => match self.peek_nth(1) {
                KwFunction => self.parse_func_decl(),
                KwConst => {
                    self.error_msg(
                        DiagnosticKind::UnsupportedSyntax,
                        "external constants are not supported anymore",
                    );
                    self.bump();
                    self.parse_value_decl();
                }
                _ => {
                    self.bump();
                    self.error_recover_msg("expected 'function'", STMT_START);
                }
            },
            _ => self.recover_to_stmt(DiagnosticKind::ExpectedModuleDefinition),
        }
        self.finish_node();
    }

    /// `import from M [language ..] (all [except { .. }] | { specs })`
    fn parse_import(&mut self) {
        self.start_node(ImportDecl);
        self.bump();
        self.expect(KwFrom, "'from'");
        self.parse_ident();
        if self.currently_is(KwLanguage) {
            self.parse_language_spec();
        }

        match self.current() {
            KwAll => {
                self.start_node(ImportSpec);
                self.bump();
                if self.currently_is(KwExcept) {
                    self.parse_except_block();
                }
                self.finish_node();
            }
            LBrace => self.parse_braced_items(Self::parse_import_spec),
            _ => self.error_msg(
                DiagnosticKind::UnexpectedToken,
                "expected 'all' or import spec",
            ),
        }
        self.parse_with_opt();
        self.finish_node();
    }

    fn parse_import_spec(&mut self) {
        self.start_node(ImportSpec);
        match self.current() {
            KwGroup => {
                self.bump();
                self.parse_comma_list(|p| {
                    p.parse_primary();
                    if p.currently_is(KwExcept) {
                        p.parse_except_block();
                    }
                });
            }
            KwImport => {
                self.bump();
                self.expect(KwAll, "'all'");
            }
            kind if DEF_KINDS.contains(kind) => {
                self.bump();
                if self.eat_token(KwAll) {
                    if self.currently_is(KwExcept) {
                        self.start_node(ExceptSpec);
                        self.bump();
                        self.parse_ref_list();
                        self.finish_node();
                    }
                } else {
                    self.parse_ref_list();
                }
            }
            _ => self.error_recover_msg("expected import definition qualifier", STMT_START),
        }
        self.finish_node();
    }

    /// `except { kind (all | refs); ... }`
    fn parse_except_block(&mut self) {
        self.start_node(ExceptSpec);
        self.bump();
        self.parse_braced_items(|p| {
            p.start_node(ImportSpec);
            if DEF_KINDS.contains(p.current()) || p.currently_is(KwImport) {
                p.bump();
            } else {
                p.error_msg(DiagnosticKind::UnexpectedToken, "expected definition qualifier");
            }
            if !p.eat_token(KwAll) {
                p.parse_ref_list();
            }
            p.finish_node();
        });
        self.finish_node();
    }

    pub(super) fn parse_ref_list(&mut self) {
        self.parse_comma_list(Self::parse_primary);
    }

    /// Plain identifier in referencing position, e.g. an imported module.
    pub(super) fn parse_ident(&mut self) {
        if !self.eat_token(Identifier) {
            self.error(DiagnosticKind::ExpectedIdentifier);
        }
    }

    fn parse_group(&mut self) {
        self.start_node(GroupDecl);
        self.bump();
        self.parse_name();
        self.parse_braced_items(Self::parse_module_item);
        self.parse_with_opt();
        self.finish_node();
    }

    fn parse_friend(&mut self) {
        self.start_node(FriendDecl);
        self.bump();
        self.expect(KwModule, "'module'");
        self.parse_ident();
        self.parse_with_opt();
        self.finish_node();
    }

    fn parse_control_part(&mut self) {
        self.start_node(ControlPart);
        self.bump();
        self.parse_block();
        self.parse_with_opt();
        self.finish_node();
    }

    /// `with { kind [override | @local] [(qualifiers)] "value" [. "value"]; ... }`
    pub(super) fn parse_with_opt(&mut self) {
        if !self.currently_is(KwWith) {
            return;
        }
        self.start_node(WithSpec);
        self.bump();
        self.parse_braced_items(Self::parse_with_stmt);
        self.finish_node();
    }

    fn parse_with_stmt(&mut self) {
        self.start_node(WithStmt);
        if !self.eat_one_of(WITH_KEYWORDS) {
            self.error_recover_msg("expected with-attribute", STMT_START);
            self.finish_node();
            return;
        }

        match self.current() {
            KwOverride => self.bump(),
            Modifier => {
                if self.current_text() != "@local" {
                    self.error_msg(DiagnosticKind::UnexpectedToken, "expected '@local'");
                }
                self.bump();
            }
            _ => {}
        }

        if self.currently_is(LParen) {
            self.start_node(WithQualifiers);
            self.bump();
            self.parse_comma_list(Self::parse_with_qualifier);
            self.expect(RParen, "')'");
            self.finish_node();
        }

        self.expect(String, "string");
        if self.eat_token(Dot) {
            self.expect(String, "string");
        }
        self.finish_node();
    }

    fn parse_with_qualifier(&mut self) {
        match self.current() {
            Identifier | LBracket => self.parse_primary(),
            kind if DEF_KINDS.contains(kind) => {
                self.start_node(ImportSpec);
                self.bump();
                self.expect(KwAll, "'all'");
                if self.currently_is(KwExcept) {
                    self.start_node(ExceptSpec);
                    self.bump();
                    self.expect(LBrace, "'{'");
                    self.parse_ref_list();
                    self.expect(RBrace, "'}'");
                    self.finish_node();
                }
                self.finish_node();
            }
            _ => self.error_recover_msg("expected with-qualifier", STMT_START),
        }
    }

    /// `template [(restriction)] [@modifier] Type Name [<..>] [(..)] [modifies base] := value`
    pub(super) fn parse_template_decl(&mut self) {
        self.start_node(TemplateDecl);
        self.parse_restriction_spec();
        self.eat_token(Modifier);
        self.parse_type_ref();
        self.parse_name();
        if self.currently_is(Lt) {
            self.parse_type_formal_pars();
        }
        if self.currently_is(LParen) {
            self.parse_formal_pars();
        }
        if self.eat_token(KwModifies) {
            self.parse_primary();
        }
        self.expect(Assign, "':='");
        self.parse_expr();
        self.parse_with_opt();
        self.finish_node();
    }

    /// `modulepar Type x [:= v]` or the grouped form `modulepar { Type x; ... }`.
    fn parse_module_par(&mut self) {
        if self.next_is(LBrace) {
            self.start_node(ModuleParGroup);
            self.bump();
            self.parse_braced_items(|p| {
                p.start_node(ValueDecl);
                p.parse_restriction_spec();
                p.parse_type_ref();
                p.parse_declarators();
                p.finish_node();
            });
            self.parse_with_opt();
            self.finish_node();
            return;
        }
        self.parse_value_decl();
    }

    /// `var`, `const`, `modulepar`, `port`, `template` and `timer` declarations.
    ///
    /// For `timer` the keyword itself is the type. For `template` the keyword
    /// opens the restriction spec.
    pub(super) fn parse_value_decl(&mut self) {
        self.start_node(ValueDecl);
        match self.current() {
            KwTimer | KwTemplate => {}
            _ => self.bump(),
        }
        if !self.currently_is(KwTimer) {
            self.parse_restriction_spec();
            self.eat_token(Modifier);
        }
        self.parse_type_ref();
        self.parse_declarators();
        self.parse_with_opt();
        self.finish_node();
    }

    fn parse_declarators(&mut self) {
        self.parse_comma_list(|p| {
            p.start_node(Declarator);
            p.parse_name();
            p.parse_array_defs();
            if p.eat_token(Assign) {
                p.parse_expr();
            }
            p.finish_node();
        });
    }

    /// `signature Name [<..>] (..) [noblock] [return T] [exception (..)]`
    fn parse_signature_decl(&mut self) {
        self.start_node(SignatureDecl);
        self.bump();
        self.parse_name();
        if self.currently_is(Lt) {
            self.parse_type_formal_pars();
        }
        self.parse_formal_pars();
        self.eat_token(KwNoblock);
        if self.currently_is(KwReturn) {
            self.parse_return_spec();
        }
        if self.eat_token(KwException) {
            self.parse_paren_expr();
        }
        self.parse_with_opt();
        self.finish_node();
    }

    /// Functions, testcases, altsteps and external functions. The body is
    /// absent for external functions.
    fn parse_func_decl(&mut self) {
        self.start_node(FuncDecl);
        self.eat_token(KwExternal);
        self.bump();
        self.eat_token(Modifier);
        self.parse_name();
        if self.currently_is(Lt) {
            self.parse_type_formal_pars();
        }
        self.parse_formal_pars();
        if self.currently_is(KwRuns) {
            self.parse_runs_on();
        }
        if self.currently_is(KwMtc) {
            self.start_node(MtcSpec);
            self.bump();
            self.parse_type_ref();
            self.finish_node();
        }
        if self.currently_is(KwSystem) {
            self.parse_system_spec();
        }
        if self.currently_is(KwReturn) {
            self.parse_return_spec();
        }
        if self.currently_is(LBrace) {
            self.parse_block();
        }
        self.parse_with_opt();
        self.finish_node();
    }
}
