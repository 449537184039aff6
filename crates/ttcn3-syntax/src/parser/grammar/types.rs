//! Type declarations, type specs and the parameter lists shared by
//! behaviour declarations.

use crate::diagnostics::DiagnosticKind;
use crate::kind::Kind::*;
use crate::kind::token_sets::{DIRECTIONS, STMT_START};
use crate::parser::Parser;

impl Parser<'_> {
    /// Dispatches on the token after `type`. `record`/`set` followed by a
    /// name is a struct; otherwise it is a list subtype (`record of T`).
    pub(super) fn parse_type_decl(&mut self) {
        self.assert_current(KwType);
        match self.peek_nth(1) {
            Identifier | KwAddress | KwCharstring | KwNull | KwUniversal => {
                self.parse_sub_type_decl()
            }
            KwPort => self.parse_port_type_decl(),
            KwComponent => self.parse_component_type_decl(),
            KwUnion => self.parse_struct_type_decl(),
            KwMap => self.parse_map_type_decl(),
            KwSet | KwRecord => match self.peek_nth(2) {
                Identifier | KwAddress => self.parse_struct_type_decl(),
                _ => self.parse_sub_type_decl(),
            },
            KwEnumerated => self.parse_enum_type_decl(),
            KwFunction | KwAltstep | KwTestcase => self.parse_behaviour_type_decl(),
            _ => {
                self.start_node(Error);
                self.bump();
                self.error(DiagnosticKind::ExpectedTypeDefinition);
                while !self.currently_is_one_of(STMT_START) && !self.eof() {
                    self.bump();
                }
                self.finish_node();
            }
        }
    }

    fn parse_sub_type_decl(&mut self) {
        self.start_node(SubTypeDecl);
        self.bump();
        self.parse_field();
        self.parse_with_opt();
        self.finish_node();
    }

    /// `type record Name [<..>] { fields } [with ..]`, also `set` and `union`.
    fn parse_struct_type_decl(&mut self) {
        self.start_node(StructTypeDecl);
        self.bump();
        self.bump();
        self.parse_name();
        if self.currently_is(Lt) {
            self.parse_type_formal_pars();
        }
        self.parse_braced_list(Self::parse_field);
        self.parse_with_opt();
        self.finish_node();
    }

    fn parse_enum_type_decl(&mut self) {
        self.start_node(EnumTypeDecl);
        self.bump();
        self.bump();
        self.parse_name();
        if self.currently_is(Lt) {
            self.parse_type_formal_pars();
        }
        self.parse_braced_list(Self::parse_expr);
        self.parse_with_opt();
        self.finish_node();
    }

    /// `type map from K to V Name`
    fn parse_map_type_decl(&mut self) {
        self.start_node(MapTypeDecl);
        self.bump();
        self.parse_map_spec();
        self.parse_name();
        if self.currently_is(Lt) {
            self.parse_type_formal_pars();
        }
        self.parse_with_opt();
        self.finish_node();
    }

    fn parse_behaviour_type_decl(&mut self) {
        self.start_node(BehaviourTypeDecl);
        self.bump();
        self.bump();
        self.parse_name();
        if self.currently_is(Lt) {
            self.parse_type_formal_pars();
        }
        self.parse_behaviour_clauses();
        self.parse_with_opt();
        self.finish_node();
    }

    /// Formal parameters followed by optional `runs on`, `system` and
    /// `return` clauses.
    fn parse_behaviour_clauses(&mut self) {
        self.parse_formal_pars();
        if self.currently_is(KwRuns) {
            self.parse_runs_on();
        }
        if self.currently_is(KwSystem) {
            self.parse_system_spec();
        }
        if self.currently_is(KwReturn) {
            self.parse_return_spec();
        }
    }

    /// `type port Name (message | procedure | mixed) [realtime] { attrs }`
    fn parse_port_type_decl(&mut self) {
        self.start_node(PortTypeDecl);
        self.bump();
        self.bump();
        self.parse_name();
        if self.currently_is(Lt) {
            self.parse_type_formal_pars();
        }
        match self.current() {
            KwMixed | KwMessage | KwProcedure => self.bump(),
            _ => self.error_msg(
                DiagnosticKind::UnexpectedToken,
                "expected 'message' or 'procedure'",
            ),
        }
        self.eat_token(KwRealtime);
        self.parse_braced_items(Self::parse_port_attribute);
        self.parse_with_opt();
        self.finish_node();
    }

    fn parse_port_attribute(&mut self) {
        match self.current() {
            KwIn | KwOut | KwInout | KwAddress => {
                self.start_node(PortAttribute);
                self.bump();
                self.parse_ref_list();
                self.finish_node();
            }
            KwMap | KwUnmap => {
                self.start_node(PortMapAttribute);
                self.bump();
                self.expect(KwParam, "'param'");
                self.parse_formal_pars();
                self.finish_node();
            }
            _ => self.error_recover_msg("expected port attribute", STMT_START),
        }
    }

    /// `type component Name [extends A, B] { body }`
    fn parse_component_type_decl(&mut self) {
        self.start_node(ComponentTypeDecl);
        self.bump();
        self.bump();
        self.parse_name();
        if self.currently_is(Lt) {
            self.parse_type_formal_pars();
        }
        if self.eat_token(KwExtends) {
            self.parse_ref_list();
        }
        self.parse_block();
        self.parse_with_opt();
        self.finish_node();
    }

    /// `[@default] TypeSpec Name [<..>] [dims] [(constraint)] [length(..)] [optional]`
    fn parse_field(&mut self) {
        self.start_node(Field);
        if self.currently_is(Modifier) {
            if self.current_text() != "@default" {
                self.error_msg(DiagnosticKind::UnexpectedToken, "expected '@default'");
            }
            self.bump();
        }
        self.parse_type_spec();
        self.parse_name();
        if self.currently_is(Lt) {
            self.parse_type_formal_pars();
        }
        self.parse_array_defs();
        if self.currently_is(LParen) {
            self.parse_paren_expr();
        }
        if self.currently_is(KwLength) {
            self.parse_length();
        }
        self.eat_token(KwOptional);
        self.finish_node();
    }

    fn parse_type_spec(&mut self) {
        if !self.enter_recursion() {
            self.bail_out();
            return;
        }
        match self.current() {
            KwAddress | KwCharstring | Identifier | KwNull | KwUniversal => self.parse_type_ref(),
            KwUnion => self.parse_struct_spec(),
            KwSet | KwRecord if self.next_is(LBrace) => self.parse_struct_spec(),
            KwSet | KwRecord => self.parse_list_spec(),
            KwMap => self.parse_map_spec(),
            KwEnumerated => {
                self.start_node(EnumSpec);
                self.bump();
                self.parse_braced_list(Self::parse_expr);
                self.finish_node();
            }
            KwFunction | KwAltstep | KwTestcase => {
                self.start_node(BehaviourSpec);
                self.bump();
                self.parse_behaviour_clauses();
                self.finish_node();
            }
            _ => self.error(DiagnosticKind::ExpectedTypeDefinition),
        }
        self.exit_recursion();
    }

    fn parse_struct_spec(&mut self) {
        self.start_node(StructSpec);
        self.bump();
        self.parse_braced_list(Self::parse_field);
        self.finish_node();
    }

    /// `record [length(..)] of T`
    fn parse_list_spec(&mut self) {
        self.start_node(ListSpec);
        self.bump();
        if self.currently_is(KwLength) {
            self.parse_length();
        }
        self.expect(KwOf, "'of'");
        self.parse_type_spec();
        self.finish_node();
    }

    fn parse_map_spec(&mut self) {
        self.start_node(MapSpec);
        self.bump();
        self.expect(KwFrom, "'from'");
        self.parse_type_spec();
        self.expect(KwTo, "'to'");
        self.parse_type_spec();
        self.finish_node();
    }

    /// `length(n)` or `length(a .. b)` in type position.
    fn parse_length(&mut self) {
        self.start_node(LengthExpr);
        self.bump();
        self.parse_paren_expr();
        self.finish_node();
    }

    /// Type in referencing position.
    pub(super) fn parse_type_ref(&mut self) {
        self.start_node(RefSpec);
        self.parse_primary();
        self.finish_node();
    }

    /// Zero or more `[expr]` dimensions.
    pub(super) fn parse_array_defs(&mut self) {
        while self.currently_is(LBracket) {
            self.start_node(ArrayDef);
            self.bump();
            self.parse_expr();
            self.expect(RBracket, "']'");
            self.finish_node();
        }
    }

    /// `{ item, item, ... }`
    fn parse_braced_list(&mut self, mut item: impl FnMut(&mut Self)) {
        self.expect(LBrace, "'{'");
        while !self.currently_is(RBrace) && !self.eof() {
            let before = self.pos;
            item(self);
            if self.pos == before {
                self.error_and_bump(DiagnosticKind::UnexpectedToken);
                continue;
            }
            if !self.eat_token(Comma) {
                break;
            }
        }
        self.expect(RBrace, "'}'");
    }

    /// `template [(omit | value | present)]` or a bare `omit`, `value` or
    /// `present`. Absent restrictions produce no node.
    pub(super) fn parse_restriction_spec(&mut self) {
        match self.current() {
            KwTemplate => {
                self.start_node(RestrictionSpec);
                self.bump();
                if self.eat_token(LParen) {
                    match self.current() {
                        KwOmit | KwValue | KwPresent => self.bump(),
                        _ => self.error_msg(
                            DiagnosticKind::UnexpectedToken,
                            "expected 'omit', 'value' or 'present'",
                        ),
                    }
                    self.expect(RParen, "')'");
                }
                self.finish_node();
            }
            KwOmit | KwValue | KwPresent => {
                self.start_node(RestrictionSpec);
                self.bump();
                self.finish_node();
            }
            _ => {}
        }
    }

    /// `( par, ... )`
    pub(super) fn parse_formal_pars(&mut self) {
        self.start_node(FormalPars);
        self.expect(LParen, "'('");
        while !self.currently_is(RParen) && !self.eof() {
            let before = self.pos;
            self.parse_formal_par();
            if self.pos == before || !self.eat_token(Comma) {
                break;
            }
        }
        self.expect(RParen, "')'");
        self.finish_node();
    }

    /// `[in | out | inout] [restriction] [@modifier] Type Name [dims] [:= default]`
    fn parse_formal_par(&mut self) {
        self.start_node(FormalPar);
        self.eat_one_of(DIRECTIONS);
        self.parse_restriction_spec();
        self.eat_token(Modifier);
        self.parse_type_ref();
        self.parse_name();
        self.parse_array_defs();
        if self.eat_token(Assign) {
            self.parse_expr();
        }
        self.finish_node();
    }

    /// `< [in] (type | signature | Type) Name [:= default], ... >`
    pub(super) fn parse_type_formal_pars(&mut self) {
        self.start_node(TypeFormalPars);
        self.assert_current(Lt);
        self.bump();
        while !self.currently_is(Gt) && !self.eof() {
            let before = self.pos;
            self.start_node(FormalPar);
            self.eat_token(KwIn);
            match self.current() {
                KwType | KwSignature => self.bump(),
                _ => self.parse_type_ref(),
            }
            self.parse_name();
            if self.eat_token(Assign) {
                self.parse_type_ref();
            }
            self.finish_node();
            if self.pos == before || !self.eat_token(Comma) {
                break;
            }
        }
        self.expect(Gt, "'>'");
        self.finish_node();
    }

    pub(super) fn parse_runs_on(&mut self) {
        self.start_node(RunsOnSpec);
        self.bump();
        self.expect(KwOn, "'on'");
        self.parse_type_ref();
        self.finish_node();
    }

    pub(super) fn parse_system_spec(&mut self) {
        self.start_node(SystemSpec);
        self.bump();
        self.parse_type_ref();
        self.finish_node();
    }

    /// `return [restriction] [@modifier] Type`
    pub(super) fn parse_return_spec(&mut self) {
        self.start_node(ReturnSpec);
        self.bump();
        self.parse_restriction_spec();
        self.eat_token(Modifier);
        self.parse_type_ref();
        self.finish_node();
    }
}
