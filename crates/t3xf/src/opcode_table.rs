// @generated from the T3XF opcode registry. Do not edit by hand.
//
// Pseudo-opcodes `REF`, `GOTO`, `LINE` and `FROZEN_REF` select packed
// instruction classes; every other opcode is an instruction-class word with
// its two low bits set.

opcodes! {
    REF = 0x0000, "ref";
    GOTO = 0x0001, "goto";
    LINE = 0x0002, "line";
    FROZEN_REF = 0x0004, "frozen_ref";
    ACACHE = 0x03f3, "acache";
    ACTION = 0x1003, "action";
    ACTIVATE = 0x0d03, "activate";
    ADD = 0x0413, "add";
    ADDRESS = 0x0ea3, "address";
    ALIVE = 0x1103, "alive";
    ALIVE1 = 0x1113, "alive1";
    ALIVEA = 0x1123, "alivea";
    ALLFROM = 0x06a3, "allfrom";
    ALLFROMP = 0x06b3, "allfromp";
    ALT = 0x0383, "alt";
    ALTND = 0x2023, "altnd";
    ALTSTEP = 0x0803, "altstep";
    ALTSTEPB = 0x0813, "altstepb";
    ALTSTEPBW = 0x0833, "altstepbw";
    ALTSTEPW = 0x0823, "altstepw";
    AND = 0x0483, "and";
    ANY = 0x0603, "any";
    ANYN = 0x0613, "anyn";
    APPLY = 0x0193, "apply";
    ARRAY = 0x0ee3, "array";
    ASSIGN = 0x0583, "assign";
    ASSIGND = 0x0593, "assignd";
    AT_DEFAULT = 0x2013, "at_default";
    BIT2HEX = 0x18c3, "bit2hex";
    BIT2INT = 0x18b3, "bit2int";
    BIT2OCT = 0x18d3, "bit2oct";
    BIT2STR = 0x18e3, "bit2str";
    BITS = 0x0113, "bits";
    BITSTRING = 0x0e03, "bitstring";
    BLOCK = 0x0083, "block";
    BOOLEAN = 0x0e13, "boolean";
    BREAK = 0x03c3, "break";
    CALL = 0x1503, "call";
    CALL1 = 0x1513, "call1";
    CALLA = 0x1533, "calla";
    CALLB = 0x1543, "callb";
    CALLB1 = 0x1553, "callb1";
    CALLBA = 0x1573, "callba";
    CALLBN = 0x1563, "callbn";
    CALLN = 0x1523, "calln";
    CALLW = 0x1583, "callw";
    CALLW1 = 0x1593, "callw1";
    CALLWA = 0x15b3, "callwa";
    CALLWN = 0x15a3, "callwn";
    CAT = 0x0563, "cat";
    CATCH = 0x1743, "catch";
    CATCH1 = 0x1763, "catch1";
    CATCHC = 0x1753, "catchc";
    CATCHC1 = 0x1773, "catchc1";
    CHAR2INT = 0x1883, "char2int";
    CHAR2OCT = 0x1893, "char2oct";
    CHARSTRING = 0x0e23, "charstring";
    CHARSTRINGU = 0x0e33, "charstringu";
    CHECK = 0x14a3, "check";
    CHECK1 = 0x14b3, "check1";
    CHECKSTATE = 0x1783, "checkstate";
    CHECKSTATEAL = 0x1793, "checkstateal";
    CHECKSTATEAN = 0x17a3, "checkstatean";
    CLEAR = 0x1383, "clear";
    CLEARA = 0x1393, "cleara";
    CLOSURE = 0x11f3, "closure";
    CLOSURETYPE = 0x0e93, "closuretype";
    COLLECT = 0x0093, "collect";
    COMPLEMENT = 0x0623, "complement";
    COMPONENT = 0x0f23, "component";
    COMPONENTX = 0x0f33, "componentx";
    CONNECT = 0x1083, "connect";
    CONST = 0x0843, "const";
    CONSTW = 0x0853, "constw";
    CONTINUE = 0x03d3, "continue";
    CONTROL = 0x0863, "control";
    CONTROLW = 0x0873, "controlw";
    CREATE = 0x1183, "create";
    CREATEA = 0x1193, "createa";
    CREATEAN = 0x11b3, "createan";
    CREATEN = 0x11a3, "createn";
    DEACTIVATE = 0x0d23, "deactivate";
    DEACTIVATEA = 0x0d33, "deactivatea";
    DECVALUE = 0x1a83, "decvalue";
    DEF = 0x05b3, "def";
    DEFAULT = 0x0ec3, "default";
    DISCONNECT = 0x1093, "disconnect";
    DISCONNECTA = 0x10a3, "disconnecta";
    DISCONNECTAA = 0x10b3, "disconnectaa";
    DISPLAY = 0x0c03, "display";
    DISPLAYO = 0x0c23, "displayo";
    DISPLAYQ = 0x0c13, "displayq";
    DISPLAYQO = 0x0c33, "displayqo";
    DIV = 0x0453, "div";
    DONE = 0x1143, "done";
    DONE1 = 0x1153, "done1";
    DONEA = 0x1163, "donea";
    DOWHILE = 0x0363, "dowhile";
    DROP = 0x00a3, "drop";
    ELSE = 0x03a3, "else";
    ENCODE = 0x0c43, "encode";
    ENCODEO = 0x0c63, "encodeo";
    ENCODEQ = 0x0c53, "encodeq";
    ENCODEQO = 0x0c73, "encodeqo";
    ENCVALUE = 0x1a73, "encvalue";
    ENUM2INT = 0x1a53, "enum2int";
    ENUMERATED = 0x0f03, "enumerated";
    EQ = 0x0503, "eq";
    ERROR = 0x02e3, "error";
    ESWAP = 0x0013, "eswap";
    EXEC = 0x0373, "exec";
    EXECUTE = 0x1063, "execute";
    EXECUTED = 0x11d3, "executed";
    EXECUTEL = 0x1073, "executel";
    EXECUTELD = 0x11c3, "executeld";
    EXTENSION = 0x0c83, "extension";
    EXTENSIONO = 0x0ca3, "extensiono";
    EXTENSIONQ = 0x0c93, "extensionq";
    EXTENSIONQO = 0x0cb3, "extensionqo";
    EXTERN = 0x08c3, "extern";
    FAIL = 0x02d3, "fail";
    FALSE = 0x0283, "false";
    FIELD = 0x0723, "field";
    FIELDO = 0x0733, "fieldo";
    FLOAT = 0x0e43, "float";
    FLOAT2INT = 0x1873, "float2int";
    FOR = 0x0343, "for";
    FROM = 0x06c3, "from";
    FSTR = 0x0173, "fstr";
    FUNCTION = 0x0903, "function";
    FUNCTIONB = 0x0913, "functionb";
    FUNCTIONBW = 0x0933, "functionbw";
    FUNCTIONV = 0x0943, "functionv";
    FUNCTIONVB = 0x0953, "functionvb";
    FUNCTIONVBW = 0x0973, "functionvbw";
    FUNCTIONVW = 0x0963, "functionvw";
    FUNCTIONW = 0x0923, "functionw";
    FUNCTIONX = 0x0983, "functionx";
    FUNCTIONXV = 0x09a3, "functionxv";
    FUNCTIONXVW = 0x09b3, "functionxvw";
    FUNCTIONXW = 0x0993, "functionxw";
    GE = 0x0513, "ge";
    GET = 0x0573, "get";
    GETCALL = 0x15c3, "getcall";
    GETCALL1 = 0x15e3, "getcall1";
    GETCALLC = 0x15d3, "getcallc";
    GETCALLC1 = 0x15f3, "getcallc1";
    GETREPLY = 0x1683, "getreply";
    GETREPLY1 = 0x16a3, "getreply1";
    GETREPLYC = 0x1693, "getreplyc";
    GETREPLYC1 = 0x16b3, "getreplyc1";
    GETVERDICT = 0x1043, "getverdict";
    GROUP = 0x0883, "group";
    GROUPW = 0x0893, "groupw";
    GT = 0x0523, "gt";
    HALT = 0x13a3, "halt";
    HALTA = 0x13b3, "halta";
    HEX2BIT = 0x1903, "hex2bit";
    HEX2INT = 0x18f3, "hex2int";
    HEX2OCT = 0x1913, "hex2oct";
    HEX2STR = 0x1923, "hex2str";
    HEXSTRING = 0x0e53, "hexstring";
    IDEF = 0x05c3, "idef";
    IEEE754DP = 0x0153, "ieee754dp";
    IF = 0x0303, "if";
    IFELSE = 0x0313, "ifelse";
    IFIELD = 0x05d3, "ifield";
    IFPRESENT = 0x0633, "ifpresent";
    IGET = 0x05a3, "iget";
    IMPORT = 0x08a3, "import";
    IMPORTW = 0x08b3, "importw";
    IN = 0x0743, "in";
    INCONC = 0x02c3, "inconc";
    INFINITYN = 0x0263, "infinityn";
    INFINITYP = 0x0273, "infinityp";
    INOUT = 0x0753, "inout";
    INT2BIT = 0x1823, "int2bit";
    INT2CHAR = 0x1803, "int2char";
    INT2ENUM = 0x1aa3, "int2enum";
    INT2FLOAT = 0x1863, "int2float";
    INT2HEX = 0x1833, "int2hex";
    INT2OCT = 0x1843, "int2oct";
    INT2STR = 0x1853, "int2str";
    INT2UNICHAR = 0x1813, "int2unichar";
    INTEGER = 0x0e63, "integer";
    INTERLEAVE = 0x0393, "interleave";
    ISBOUND = 0x1ad3, "isbound";
    ISCHOSEN = 0x19f3, "ischosen";
    ISPRESENT = 0x19e3, "ispresent";
    ISTR = 0x0163, "istr";
    ISVALUE = 0x1a63, "isvalue";
    KILL = 0x13c3, "kill";
    KILLA = 0x13d3, "killa";
    KILLED = 0x1243, "killed";
    KILLED1 = 0x1253, "killed1";
    KILLEDA = 0x1263, "killeda";
    LE = 0x0533, "le";
    LENGTH = 0x0643, "length";
    LENGTHOF = 0x19b3, "lengthof";
    LOAD = 0x0053, "load";
    LOG = 0x1013, "log";
    LT = 0x0543, "lt";
    MAP = 0x10c3, "map";
    MAP3 = 0x14c3, "map3";
    MAP4 = 0x14d3, "map4";
    MAPT = 0x0fc3, "mapt";
    MARK = 0x00c3, "mark";
    MATCH = 0x1023, "match";
    MOD = 0x0463, "mod";
    MODULE = 0x08e3, "module";
    MODULEW = 0x08f3, "modulew";
    MOVE = 0x05e3, "move";
    MPAR = 0x0a03, "mpar";
    MPARD = 0x0a13, "mpard";
    MPARDW = 0x0a33, "mpardw";
    MPARW = 0x0a23, "mparw";
    MTC = 0x0213, "mtc";
    MUL = 0x0443, "mul";
    NAME = 0x0183, "name";
    NATLONG = 0x0143, "natlong";
    NE = 0x0553, "ne";
    NEG = 0x0423, "neg";
    NIBBLES = 0x0123, "nibbles";
    NONE = 0x02a3, "none";
    NOP = 0x0003, "nop";
    NOT = 0x0493, "not";
    NOW = 0x1343, "now";
    NULL = 0x0203, "null";
    OCT2BIT = 0x1943, "oct2bit";
    OCT2CHR = 0x1973, "oct2chr";
    OCT2HEX = 0x1953, "oct2hex";
    OCT2INT = 0x1933, "oct2int";
    OCT2STR = 0x1963, "oct2str";
    OCTETS = 0x0133, "octets";
    OCTETSTRING = 0x0e73, "octetstring";
    OMIT = 0x0253, "omit";
    OR = 0x04a3, "or";
    OUT = 0x0763, "out";
    PARAM = 0x17d3, "param";
    PASS = 0x02b3, "pass";
    PATTERN = 0x0653, "pattern";
    PERMITO = 0x0783, "permito";
    PERMITP = 0x07a3, "permitp";
    PERMITT = 0x0793, "permitt";
    PERMUTATION = 0x0663, "permutation";
    PORTM = 0x0f43, "portm";
    PORTMA = 0x0f63, "portma";
    PORTP = 0x0f53, "portp";
    PORTPA = 0x0f73, "portpa";
    POS = 0x0403, "pos";
    PROFILE_TIME = 0x1fe3, "profile_time";
    RAISE = 0x1703, "raise";
    RAISE1 = 0x1713, "raise1";
    RAISEA = 0x1733, "raisea";
    RAISEN = 0x1723, "raisen";
    RANGE = 0x0673, "range";
    READ = 0x1303, "read";
    RECEIVE = 0x1443, "receive";
    RECEIVE1 = 0x1463, "receive1";
    RECEIVEC = 0x1453, "receivec";
    RECEIVEC1 = 0x1473, "receivec1";
    RECORD = 0x0f83, "record";
    RECORDOF = 0x0fa3, "recordof";
    REF_BIT2HEX = 0x1dc3, "ref_bit2hex";
    REF_BIT2INT = 0x1db3, "ref_bit2int";
    REF_BIT2OCT = 0x1dd3, "ref_bit2oct";
    REF_BIT2STR = 0x1de3, "ref_bit2str";
    REF_CHAR2INT = 0x1d83, "ref_char2int";
    REF_CHAR2OCT = 0x1d93, "ref_char2oct";
    REF_DECVALUE = 0x1f83, "ref_decvalue";
    REF_ENCVALUE = 0x1f73, "ref_encvalue";
    REF_ENUM2INT = 0x1f53, "ref_enum2int";
    REF_FLOAT2INT = 0x1d73, "ref_float2int";
    REF_HEX2BIT = 0x1e03, "ref_hex2bit";
    REF_HEX2INT = 0x1df3, "ref_hex2int";
    REF_HEX2OCT = 0x1e13, "ref_hex2oct";
    REF_HEX2STR = 0x1e23, "ref_hex2str";
    REF_INT2BIT = 0x1d23, "ref_int2bit";
    REF_INT2CHAR = 0x1d03, "ref_int2char";
    REF_INT2ENUM = 0x1fa3, "ref_int2enum";
    REF_INT2FLOAT = 0x1d63, "ref_int2float";
    REF_INT2HEX = 0x1d33, "ref_int2hex";
    REF_INT2OCT = 0x1d43, "ref_int2oct";
    REF_INT2STR = 0x1d53, "ref_int2str";
    REF_INT2UNICHAR = 0x1d13, "ref_int2unichar";
    REF_ISBOUND = 0x1fd3, "ref_isbound";
    REF_ISCHOSEN = 0x1ef3, "ref_ischosen";
    REF_ISPRESENT = 0x1ee3, "ref_ispresent";
    REF_ISVALUE = 0x1f63, "ref_isvalue";
    REF_LENGTHOF = 0x1eb3, "ref_lengthof";
    REF_OCT2BIT = 0x1e43, "ref_oct2bit";
    REF_OCT2CHR = 0x1e73, "ref_oct2chr";
    REF_OCT2HEX = 0x1e53, "ref_oct2hex";
    REF_OCT2INT = 0x1e33, "ref_oct2int";
    REF_OCT2STR = 0x1e63, "ref_oct2str";
    REF_REGEXP = 0x1f03, "ref_regexp";
    REF_REPLACE = 0x1f23, "ref_replace";
    REF_RND = 0x1f33, "ref_rnd";
    REF_RNDS = 0x1f43, "ref_rnds";
    REF_SIZEOF = 0x1ec3, "ref_sizeof";
    REF_STR2FLOAT = 0x1ea3, "ref_str2float";
    REF_STR2HEX = 0x1fc3, "ref_str2hex";
    REF_STR2INT = 0x1e83, "ref_str2int";
    REF_STR2OCT = 0x1e93, "ref_str2oct";
    REF_SUBSTR = 0x1f13, "ref_substr";
    REF_TESTCASENAME = 0x1f93, "ref_testcasename";
    REF_UNICHAR2INT = 0x1da3, "ref_unichar2int";
    REF_VAL2STR = 0x1ed3, "ref_val2str";
    REF_XINT2ENUM = 0x1fb3, "ref_xint2enum";
    REGEXP = 0x1a03, "regexp";
    REM = 0x0473, "rem";
    REPEAT = 0x03b3, "repeat";
    REPLACE = 0x1a23, "replace";
    REPLY = 0x1603, "reply";
    REPLY1 = 0x1613, "reply1";
    REPLYA = 0x1633, "replya";
    REPLYN = 0x1623, "replyn";
    REPLYV = 0x1643, "replyv";
    REPLYV1 = 0x1653, "replyv1";
    REPLYVA = 0x1673, "replyva";
    REPLYVN = 0x1663, "replyvn";
    RETURN = 0x0323, "return";
    RND = 0x1a33, "rnd";
    RNDS = 0x1a43, "rnds";
    ROL = 0x04e3, "rol";
    ROR = 0x04f3, "ror";
    RUNNING = 0x1203, "running";
    RUNNING1C = 0x1213, "running1c";
    RUNNING1T = 0x1313, "running1t";
    RUNNINGAC = 0x1223, "runningac";
    SCAN = 0x00d3, "scan";
    SELF = 0x0223, "self";
    SEND = 0x1403, "send";
    SEND1 = 0x1413, "send1";
    SENDA = 0x1433, "senda";
    SENDER = 0x17e3, "sender";
    SENDN = 0x1423, "sendn";
    SET = 0x0f93, "set";
    SETOF = 0x0fb3, "setof";
    SETVERDICT = 0x1053, "setverdict";
    SHL = 0x04c3, "shl";
    SHR = 0x04d3, "shr";
    SIG = 0x0b03, "sig";
    SIGA = 0x0b13, "siga";
    SIGAW = 0x0b33, "sigaw";
    SIGV = 0x0b43, "sigv";
    SIGVW = 0x0b53, "sigvw";
    SIGW = 0x0b23, "sigw";
    SIGX = 0x0b83, "sigx";
    SIGXA = 0x0b93, "sigxa";
    SIGXAW = 0x0bb3, "sigxaw";
    SIGXV = 0x0bc3, "sigxv";
    SIGXVW = 0x0bd3, "sigxvw";
    SIGXW = 0x0ba3, "sigxw";
    SIZEOF = 0x19c3, "sizeof";
    SKIP = 0x0243, "skip";
    SMATCH = 0x00f3, "smatch";
    SOURCE = 0x08d3, "source";
    SPECPLC = 0x0d43, "specplc";
    START = 0x1283, "start";
    STARTAP = 0x12b3, "startap";
    STARTC = 0x1293, "startc";
    STARTD = 0x12a3, "startd";
    STEP = 0x03e3, "step";
    STOP = 0x12c3, "stop";
    STOPAC = 0x12d3, "stopac";
    STOPAP = 0x12e3, "stopap";
    STOPAT = 0x12f3, "stopat";
    STOPI = 0x0333, "stopi";
    STORE = 0x0063, "store";
    STR2FLOAT = 0x19a3, "str2float";
    STR2HEX = 0x1ac3, "str2hex";
    STR2INT = 0x1983, "str2int";
    STR2OCT = 0x1993, "str2oct";
    SUB = 0x0433, "sub";
    SUBSET = 0x0683, "subset";
    SUBSTR = 0x1a13, "substr";
    SUBTYPE = 0x0ef3, "subtype";
    SUPERSET = 0x0693, "superset";
    SYSTEM = 0x0233, "system";
    TCSTOP = 0x11e3, "tcstop";
    TEMPLATE = 0x0a43, "template";
    TEMPLATEW = 0x0a53, "templatew";
    TERM = 0x0713, "term";
    TESTCASE = 0x0a83, "testcase";
    TESTCASENAME = 0x1a93, "testcasename";
    TESTCASES = 0x0a93, "testcases";
    TESTCASESW = 0x0ab3, "testcasesw";
    TESTCASEW = 0x0aa3, "testcasew";
    TIMEOUT = 0x1323, "timeout";
    TIMEOUT1 = 0x1333, "timeout1";
    TIMER = 0x0ed3, "timer";
    TIMESTAMP = 0x17f3, "timestamp";
    TO = 0x06d3, "to";
    TRIGGER = 0x1483, "trigger";
    TRIGGER1 = 0x1493, "trigger1";
    TRUE = 0x0293, "true";
    TYPE = 0x0a63, "type";
    TYPEW = 0x0a73, "typew";
    UNICHAR2INT = 0x18a3, "unichar2int";
    UNION = 0x0ff3, "union";
    UNMAP = 0x10d3, "unmap";
    UNMAPA = 0x10e3, "unmapa";
    UNMAPAA = 0x10f3, "unmapaa";
    UNMAPFROMTO = 0x0fd3, "unmapfromto";
    UTF8 = 0x0103, "utf8";
    VAL2STR = 0x1ae3, "val2str";
    VALUE = 0x17c3, "value";
    VALUEOF = 0x1033, "valueof";
    VAR = 0x0703, "var";
    VARDUP = 0x06f3, "vardup";
    VARIANT = 0x0cc3, "variant";
    VARIANTO = 0x0ce3, "varianto";
    VARIANTQ = 0x0cd3, "variantq";
    VARIANTQO = 0x0cf3, "variantqo";
    VERDICTTYPE = 0x0e83, "verdicttype";
    VERSION = 0x0033, "version";
    VLIST = 0x0073, "vlist";
    WAIT = 0x1353, "wait";
    WHILE = 0x0353, "while";
    WIDEN = 0x0023, "widen";
    XINT2ENUM = 0x1ab3, "xint2enum";
    XOR = 0x04b3, "xor";
}
